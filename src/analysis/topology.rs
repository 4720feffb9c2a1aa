//! Dependency structure of unit definitions.
//!
//! Every unit points at the units its definition is written in, e.g.
//! "N" -> {"kg", "m", "s"}. The dictionary contract says this graph is
//! acyclic; canonicalization would not terminate otherwise.
use crate::model::DictionaryIndex;
use crate::symbol::SymbolParser;
use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

/// Builds the unit -> definition-atom graph. Definitions that do not parse
/// contribute no edges; the unit rules report them.
pub fn definition_graph<'a>(index: &DictionaryIndex<'a>) -> DiGraphMap<&'a str, ()> {
    let mut graph = DiGraphMap::new();
    let parser = SymbolParser::new(index);
    let dictionary = index.dictionary;

    for unit in &dictionary.units {
        let source = unit.symbol.as_str();
        graph.add_node(source);

        let Some(definition) = unit.definition() else { continue };
        let Ok(parsed) = parser.parse(definition) else { continue };
        for component in &parsed.components {
            if let Some(target) = index.unit(&component.atom) {
                graph.add_edge(source, target.symbol.as_str(), ());
            }
        }
    }
    graph
}

/// Groups of units whose definitions refer to each other, each sorted, in
/// a stable order. Empty for a well-formed dictionary.
pub fn definition_cycles<'a>(index: &DictionaryIndex<'a>) -> Vec<Vec<&'a str>> {
    let graph = definition_graph(index);
    let mut cycles: Vec<Vec<&'a str>> = tarjan_scc(&graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
        .map(|mut scc| {
            scc.sort_unstable();
            scc
        })
        .collect();
    cycles.sort();
    cycles
}
