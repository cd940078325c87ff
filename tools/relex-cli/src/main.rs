use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use relex_extractor::{
    extract_all, Assembler, DetailedExtraction, ExtractorConfig, MinimalExtraction, PatternExtractor,
};
use relex_graph::DependencyGraph;
use relex_protocol::SentenceGraph;
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use rkyv::{AlignedVec, Deserialize};
use serde::{Deserialize as SerdeDeserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about = "Relational extraction over dependency graphs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run patterns over parsed sentences and print the extractions
    Extract {
        /// Sentence graphs: JSON (one graph or an array) or a compiled `.rkyv` archive
        #[arg(value_name = "FILE")]
        graphs: PathBuf,

        /// Pattern to apply, optionally named as `name=pattern`; repeatable
        #[arg(short, long = "pattern", required = true)]
        patterns: Vec<String>,

        /// JSON file overriding the default extractor configuration
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Keep each part at its head node
        #[arg(long)]
        minimal: bool,

        /// Print JSON instead of tab-separated rows
        #[arg(long)]
        json: bool,
    },
    /// Compile a JSON sentence graph to a validated rkyv archive
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
}

#[derive(SerdeDeserialize)]
#[serde(untagged)]
enum GraphInput {
    Many(Vec<SentenceGraph>),
    One(SentenceGraph),
}

#[derive(Serialize)]
struct Row {
    sentence: u32,
    extractor: String,
    arg1: String,
    rel: String,
    arg2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    clause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    adverbial: Option<String>,
}

impl Row {
    fn new(sentence: u32, e: &DetailedExtraction) -> Self {
        let minimal = MinimalExtraction::from(e);
        Self {
            sentence,
            extractor: e.extractor().name().to_string(),
            arg1: minimal.arg1,
            rel: minimal.rel,
            arg2: minimal.arg2,
            clause: e.clausal().map(|c| c.text()),
            adverbial: e.modifier().map(|m| m.text().to_string()),
        }
    }

    fn to_tsv(&self) -> String {
        let mut fields = vec![
            self.sentence.to_string(),
            self.extractor.clone(),
            self.arg1.clone(),
            self.rel.clone(),
            self.arg2.clone(),
        ];
        fields.extend(self.clause.iter().cloned());
        fields.extend(self.adverbial.iter().cloned());
        fields.join("\t")
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn,relex=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match Cli::parse().command {
        Command::Extract {
            graphs,
            patterns,
            config,
            minimal,
            json,
        } => extract(&graphs, &patterns, config.as_deref(), !minimal, json),
        Command::Compile { input, output } => compile(&input, &output),
    }
}

fn extract(path: &Path, patterns: &[String], config: Option<&Path>, expand: bool, json: bool) -> Result<()> {
    let config = match config {
        Some(file) => {
            let text = fs::read_to_string(file).with_context(|| format!("reading config {:?}", file))?;
            ExtractorConfig::from_json(&text).with_context(|| format!("parsing config {:?}", file))?
        }
        None => ExtractorConfig::default(),
    };
    let assembler = Assembler::new(config).context("building assembler")?;

    let extractors = patterns
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let (name, source) = match spec.split_once('=') {
                Some((name, source)) if !name.contains('{') => (name.trim().to_string(), source),
                _ => (format!("pattern-{}", i + 1), spec.as_str()),
            };
            PatternExtractor::compile(name, source)
                .map(Arc::new)
                .with_context(|| format!("compiling pattern {:?}", spec))
        })
        .collect::<Result<Vec<_>>>()?;

    let sentences = load_graphs(path)?;
    info!(sentences = sentences.len(), extractors = extractors.len(), "extracting");

    let mut rows = Vec::new();
    for sentence in &sentences {
        let graph = match DependencyGraph::from_sentence(sentence) {
            Ok(graph) => graph,
            Err(e) => {
                warn!(sentence = %sentence.id, error = %e, "skipping malformed sentence");
                continue;
            }
        };
        for e in extract_all(&extractors, &graph, &assembler, expand)? {
            rows.push(Row::new(graph.id().into(), &e));
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{}", row.to_tsv());
        }
    }
    info!(extractions = rows.len(), "done");
    Ok(())
}

fn load_graphs(path: &Path) -> Result<Vec<SentenceGraph>> {
    let is_archive = path.extension().map_or(false, |ext| ext == "rkyv");
    if is_archive {
        let bytes = fs::read(path).with_context(|| format!("reading {:?}", path))?;
        let mut aligned = AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(&bytes);

        let archived = match rkyv::check_archived_root::<SentenceGraph>(&aligned) {
            Ok(archived) => archived,
            Err(e) => bail!("invalid sentence archive {:?}: {:?}", path, e),
        };
        let sentence: SentenceGraph = archived.deserialize(&mut rkyv::Infallible)?;
        return Ok(vec![sentence]);
    }

    let text = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
    let input: GraphInput = serde_json::from_str(&text).with_context(|| format!("parsing {:?}", path))?;
    Ok(match input {
        GraphInput::Many(sentences) => sentences,
        GraphInput::One(sentence) => vec![sentence],
    })
}

fn compile(input: &Path, output: &Path) -> Result<()> {
    info!(input = ?input, "reading sentence graph");
    let text = fs::read_to_string(input).with_context(|| format!("reading {:?}", input))?;
    let sentence: SentenceGraph = serde_json::from_str(&text).with_context(|| format!("parsing {:?}", input))?;

    // Reject graphs the extractor would refuse later
    DependencyGraph::from_sentence(&sentence).with_context(|| format!("validating {:?}", input))?;

    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(&sentence)
        .map_err(|e| anyhow::anyhow!("archiving sentence: {:?}", e))?;
    let bytes = serializer.into_serializer().into_inner();

    fs::write(output, &bytes).with_context(|| format!("writing {:?}", output))?;
    info!(output = ?output, bytes = bytes.len(), nodes = sentence.nodes.len(), "archive written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use relex_protocol::labels;

    #[test]
    fn test_row_rendering() {
        let sentence = SentenceGraph::builder()
            .token("John", "NNP")
            .token("eats", "VBZ")
            .token("red", "JJ")
            .token("apples", "NNS")
            .edge(1, 0, labels::NSUBJ)
            .edge(1, 3, labels::DOBJ)
            .edge(3, 2, labels::AMOD)
            .build();
        let graph = DependencyGraph::from_sentence(&sentence).unwrap();
        let assembler = Assembler::new(ExtractorConfig::default()).unwrap();
        let extractor = Arc::new(PatternExtractor::compile("svo", "{arg1} <nsubj< {rel} >dobj> {arg2}").unwrap());

        let found = extractor.extract(&graph, &assembler, true).unwrap();
        let row = Row::new(0, &found[0]);

        assert_eq!(row.to_tsv(), "0\tsvo\tJohn\teats\tred apples");
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"sentence":0,"extractor":"svo","arg1":"John","rel":"eats","arg2":"red apples"}"#
        );
    }

    #[test]
    fn test_compiled_archive_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sentence.json");
        let output = dir.path().join("sentence.rkyv");

        let sentence = SentenceGraph::builder()
            .id(relex_protocol::SentenceId::new(3))
            .token("John", "NNP")
            .lemma_token("said", "VBD", "say")
            .token("hello", "UH")
            .edge(1, 0, labels::NSUBJ)
            .edge(1, 2, labels::DOBJ)
            .build();
        fs::write(&input, serde_json::to_string(&sentence).unwrap()).unwrap();

        compile(&input, &output).unwrap();
        assert_eq!(load_graphs(&output).unwrap(), vec![sentence.clone()]);
        assert_eq!(load_graphs(&input).unwrap(), vec![sentence]);
    }

    #[test]
    fn test_compile_rejects_dangling_edges() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.json");
        let output = dir.path().join("broken.rkyv");
        fs::write(
            &input,
            r#"{"nodes":[{"text":"Hi","postag":"UH","start":0,"end":1}],"edges":[{"governor":0,"dependent":5,"label":"dep"}]}"#,
        )
        .unwrap();

        assert!(compile(&input, &output).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_corrupt_archive_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.rkyv");
        fs::write(&path, [0xffu8; 7]).unwrap();

        assert!(load_graphs(&path).is_err());
    }

    #[test]
    fn test_graph_input_accepts_one_or_many() {
        let one = r#"{"nodes":[{"text":"Hi","postag":"UH","start":0,"end":1}],"edges":[]}"#;
        let many = format!("[{},{}]", one, one);

        assert!(matches!(serde_json::from_str::<GraphInput>(one).unwrap(), GraphInput::One(_)));
        match serde_json::from_str::<GraphInput>(&many).unwrap() {
            GraphInput::Many(sentences) => assert_eq!(sentences.len(), 2),
            GraphInput::One(_) => panic!("expected an array"),
        }
    }
}
