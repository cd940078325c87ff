use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{alpha1, char, multispace0},
    combinator::{all_consuming, map},
    multi::{many0, separated_list1},
    sequence::{delimited, pair, preceded, separated_pair, terminated},
    IResult,
};
use relex_graph::Direction;

/// Constraint value before compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue<'a> {
    Exact(&'a str),
    Regex(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNode<'a> {
    pub role: &'a str,
    pub constraints: Vec<(&'a str, RawValue<'a>)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEdge<'a> {
    pub direction: Direction,
    pub labels: Vec<&'a str>,
}

/// A parsed chain: `nodes.len() == edges.len() + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPattern<'a> {
    pub nodes: Vec<RawNode<'a>>,
    pub edges: Vec<RawEdge<'a>>,
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_label_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | ':' | '$' | '-')
}

fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

fn value(input: &str) -> IResult<&str, RawValue<'_>> {
    alt((
        map(delimited(char('/'), take_while1(|c: char| c != '/'), char('/')), RawValue::Regex),
        map(take_while1(|c: char| !matches!(c, '}' | ':') && !c.is_whitespace()), RawValue::Exact),
    ))(input)
}

fn constraint(input: &str) -> IResult<&str, (&str, RawValue<'_>)> {
    separated_pair(alpha1, char('='), value)(input)
}

/// `{role}` or `{role:key=value:key=/regex/}`
fn node(input: &str) -> IResult<&str, RawNode<'_>> {
    map(
        delimited(
            char('{'),
            pair(take_while1(is_name_char), many0(preceded(char(':'), constraint))),
            char('}'),
        ),
        |(role, constraints)| RawNode { role, constraints },
    )(input)
}

fn labels(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(char('|'), take_while1(is_label_char))(input)
}

/// `>label>` walks down to a dependent, `<label<` walks up to a governor.
fn edge(input: &str) -> IResult<&str, RawEdge<'_>> {
    alt((
        map(delimited(char('>'), labels, char('>')), |labels| RawEdge {
            direction: Direction::Down,
            labels,
        }),
        map(delimited(char('<'), labels, char('<')), |labels| RawEdge {
            direction: Direction::Up,
            labels,
        }),
    ))(input)
}

pub fn parse_pattern(input: &str) -> IResult<&str, RawPattern<'_>> {
    let (rest, (first, steps)) = all_consuming(terminated(
        pair(ws(node), many0(pair(ws(edge), ws(node)))),
        multispace0,
    ))(input)?;

    let mut nodes = vec![first];
    let mut edges = Vec::with_capacity(steps.len());
    for (e, n) in steps {
        edges.push(e);
        nodes.push(n);
    }

    Ok((rest, RawPattern { nodes, edges }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chain() {
        let (_, p) = parse_pattern("{arg1} <nsubj< {rel:postag=/VB.*/} >dobj|iobj> {arg2}").unwrap();

        assert_eq!(p.nodes.len(), 3);
        assert_eq!(p.edges.len(), 2);
        assert_eq!(p.nodes[0].role, "arg1");
        assert_eq!(p.nodes[1].constraints, vec![("postag", RawValue::Regex("VB.*"))]);
        assert_eq!(p.edges[0].direction, Direction::Up);
        assert_eq!(p.edges[1].labels, vec!["dobj", "iobj"]);
    }

    #[test]
    fn test_parse_exact_constraints() {
        let (_, p) = parse_pattern("  {rel:text=said:postag=VBD}  ").unwrap();
        assert_eq!(
            p.nodes[0].constraints,
            vec![("text", RawValue::Exact("said")), ("postag", RawValue::Exact("VBD"))]
        );
    }

    #[test]
    fn test_parse_rejects_dangling_edge() {
        assert!(parse_pattern("{arg1} <nsubj<").is_err());
        assert!(parse_pattern("{arg1} {arg2}").is_err());
        assert!(parse_pattern("").is_err());
    }
}
