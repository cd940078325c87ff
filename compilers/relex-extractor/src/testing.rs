//! Hand-parsed sentences shared by the unit tests.

use relex_graph::{DependencyGraph, NodeId, NodeSet};
use relex_protocol::{labels, SentenceGraph};

pub fn load(sentence: SentenceGraph) -> DependencyGraph {
    DependencyGraph::from_sentence(&sentence).expect("fixture graph is well formed")
}

pub fn n(i: u32) -> NodeId {
    NodeId::new(i)
}

pub fn set(raw: &[u32]) -> NodeSet {
    raw.iter().map(|&i| NodeId::new(i)).collect()
}

/// John(0) eats(1) red(2) apples(3) quickly(4)
pub fn john_eats_red_apples() -> DependencyGraph {
    load(
        SentenceGraph::builder()
            .token("John", "NNP")
            .token("eats", "VBZ")
            .token("red", "JJ")
            .token("apples", "NNS")
            .token("quickly", "RB")
            .edge(1, 0, labels::NSUBJ)
            .edge(1, 3, labels::DOBJ)
            .edge(3, 2, labels::AMOD)
            .edge(1, 4, labels::ADVMOD)
            .build(),
    )
}

/// John(0) eats(1) meat(2) and(3) cheese(4)
pub fn meat_and_cheese() -> DependencyGraph {
    load(
        SentenceGraph::builder()
            .token("John", "NNP")
            .token("eats", "VBZ")
            .token("meat", "NN")
            .token("and", "CC")
            .token("cheese", "NN")
            .edge(1, 0, labels::NSUBJ)
            .edge(1, 2, labels::DOBJ)
            .edge(2, 4, labels::CONJ_AND)
            .edge(2, 3, labels::CC)
            .build(),
    )
}

/// the(0) man(1) who(2) left(3) smiled(4)
pub fn the_man_who_left() -> DependencyGraph {
    load(
        SentenceGraph::builder()
            .token("the", "DT")
            .token("man", "NN")
            .token("who", "WP")
            .token("left", "VBD")
            .token("smiled", "VBD")
            .edge(1, 0, labels::DET)
            .edge(1, 3, labels::RCMOD)
            .edge(3, 2, labels::NSUBJ)
            .edge(4, 1, labels::NSUBJ)
            .build(),
    )
}

/// Mary(0) who(1) left(2) smiled(3)
pub fn mary_who_left() -> DependencyGraph {
    load(
        SentenceGraph::builder()
            .token("Mary", "NNP")
            .token("who", "WP")
            .token("left", "VBD")
            .token("smiled", "VBD")
            .edge(0, 2, labels::RCMOD)
            .edge(2, 1, labels::NSUBJ)
            .edge(3, 0, labels::NSUBJ)
            .build(),
    )
}

/// John(0) said(1) that(2) Mary(3) left(4)
pub fn john_said_that_mary_left() -> DependencyGraph {
    load(
        SentenceGraph::builder()
            .token("John", "NNP")
            .lemma_token("said", "VBD", "say")
            .token("that", "IN")
            .token("Mary", "NNP")
            .lemma_token("left", "VBD", "leave")
            .edge(1, 0, labels::NSUBJ)
            .edge(1, 4, labels::CCOMP)
            .edge(4, 2, labels::MARK)
            .edge(4, 3, labels::NSUBJ)
            .build(),
    )
}

/// He(0) will(1) not(2) be(3) the(4) president(5)
pub fn he_will_not_be_president() -> DependencyGraph {
    load(
        SentenceGraph::builder()
            .token("He", "PRP")
            .token("will", "MD")
            .token("not", "RB")
            .token("be", "VB")
            .token("the", "DT")
            .token("president", "NN")
            .edge(5, 0, labels::NSUBJ)
            .edge(5, 1, labels::AUX)
            .edge(5, 2, labels::ADVMOD)
            .edge(5, 3, labels::COP)
            .edge(5, 4, labels::DET)
            .build(),
    )
}

/// She(0) gave(1) him(2) books(3)
pub fn she_gave_him_books() -> DependencyGraph {
    load(
        SentenceGraph::builder()
            .token("She", "PRP")
            .token("gave", "VBD")
            .token("him", "PRP")
            .token("books", "NNS")
            .edge(1, 0, labels::NSUBJ)
            .edge(1, 2, labels::IOBJ)
            .edge(1, 3, labels::DOBJ)
            .build(),
    )
}

/// He(0) ate(1) fish(2) chips(3), parsed with two direct objects
pub fn he_ate_fish_chips() -> DependencyGraph {
    load(
        SentenceGraph::builder()
            .token("He", "PRP")
            .token("ate", "VBD")
            .token("fish", "NN")
            .token("chips", "NNS")
            .edge(1, 0, labels::NSUBJ)
            .edge(1, 2, labels::DOBJ)
            .edge(1, 3, labels::DOBJ)
            .build(),
    )
}

/// John(0) left(1) when(2) Mary(3) arrived(4)
pub fn john_left_when_mary_arrived() -> DependencyGraph {
    load(
        SentenceGraph::builder()
            .token("John", "NNP")
            .token("left", "VBD")
            .token("when", "WRB")
            .token("Mary", "NNP")
            .token("arrived", "VBD")
            .edge(1, 0, labels::NSUBJ)
            .edge(1, 4, labels::ADVCL)
            .edge(4, 2, labels::ADVMOD)
            .edge(4, 3, labels::NSUBJ)
            .build(),
    )
}

/// the(0) man(1) whom(2) she(3) saw(4)
pub fn the_man_whom_she_saw() -> DependencyGraph {
    load(
        SentenceGraph::builder()
            .token("the", "DT")
            .token("man", "NN")
            .token("whom", "WP")
            .token("she", "PRP")
            .token("saw", "VBD")
            .edge(1, 0, labels::DET)
            .edge(1, 4, labels::RCMOD)
            .edge(4, 2, labels::DOBJ)
            .edge(4, 3, labels::NSUBJ)
            .build(),
    )
}

/// He(0) is(1) the(2) best(3) player(4), with the copula on the noun
pub fn he_is_the_best_player() -> DependencyGraph {
    load(
        SentenceGraph::builder()
            .token("He", "PRP")
            .token("is", "VBZ")
            .token("the", "DT")
            .token("best", "JJS")
            .token("player", "NN")
            .edge(4, 0, labels::NSUBJ)
            .edge(4, 1, labels::COP)
            .edge(4, 2, labels::DET)
            .edge(4, 3, labels::AMOD)
            .build(),
    )
}
