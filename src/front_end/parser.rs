use crate::{
    error::{Error, Result},
    front_end::EdgeList,
};
use itertools::Itertools;
use log::warn;
use pest::{iterators::Pair, Parser};
use pest_derive::Parser;

pub type EdgeListRule = Rule;

#[derive(Parser)]
#[grammar = "front_end/grammar.pest"]
struct EdgeListParser;

/// Parses `node_count edge_count` followed by `edge_count` pairs of node ids.
///
/// Pairs past the declared count are ignored.
pub fn parse(input: &str) -> Result<EdgeList> {
    let mut pairs = EdgeListParser::parse(Rule::edge_list, input)?;
    let (num_vertices, num_edges) = match pairs.next() {
        Some(pair) if pair.as_rule() == Rule::header => parse_header(pair)?,
        _ => unreachable!(),
    };
    let mut edges = Vec::with_capacity(num_edges.min(input.len() / 4));
    let mut num_ignored = 0;
    for pair in pairs {
        match pair.as_rule() {
            Rule::edge => {
                if edges.len() < num_edges {
                    edges.push(parse_two(pair)?);
                } else {
                    num_ignored += 1;
                }
            }
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }
    if edges.len() < num_edges {
        return Err(Error::MissingEdges {
            expected: num_edges,
            found: edges.len(),
        });
    }
    if num_ignored > 0 {
        warn!(
            "ignoring {} pairs after the declared {} edges",
            num_ignored, num_edges
        );
    }
    Ok(EdgeList::new(num_vertices, edges))
}

fn parse_header(pair: Pair<Rule>) -> Result<(usize, usize)> {
    let (num_vertices, num_edges) = parse_two(pair)?;
    Ok((
        non_negative("node count", num_vertices)?,
        non_negative("edge count", num_edges)?,
    ))
}

fn non_negative(what: &'static str, n: i64) -> Result<usize> {
    if n < 0 {
        Err(Error::NegativeHeader(what, n))
    } else {
        Ok(n as usize)
    }
}

fn parse_two(pair: Pair<Rule>) -> Result<(i64, i64)> {
    match pair.into_inner().collect_tuple() {
        Some((x, y)) => Ok((parse_int(x)?, parse_int(y)?)),
        None => unreachable!(),
    }
}

fn parse_int(pair: Pair<Rule>) -> Result<i64> {
    pair.as_str()
        .parse()
        .map_err(|_| Error::InvalidNumber(String::from(pair.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            parse("3 2\n1 2\n2 3\n").unwrap(),
            EdgeList::new(3, vec![(1, 2), (2, 3)])
        );
        assert_eq!(
            parse("  4 3 1 2\t1 3\r\n1 4").unwrap(),
            EdgeList::new(4, vec![(1, 2), (1, 3), (1, 4)])
        );
        assert_eq!(parse("5 0").unwrap(), EdgeList::new(5, vec![]));
    }

    #[test]
    fn test_keeps_raw_ids() {
        assert_eq!(
            parse("2 2\n-1 2\n7 7\n").unwrap(),
            EdgeList::new(2, vec![(-1, 2), (7, 7)])
        );
    }

    #[test]
    fn test_extra_pairs() {
        assert_eq!(
            parse("3 1\n1 2\n2 3\n").unwrap(),
            EdgeList::new(3, vec![(1, 2)])
        );
    }

    #[test]
    fn test_missing_edges() {
        match parse("3 3\n1 2\n2 3\n") {
            Err(Error::MissingEdges { expected, found }) => {
                assert_eq!((expected, found), (3, 2));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_bad_header() {
        assert!(matches!(
            parse("-3 1\n1 2\n"),
            Err(Error::NegativeHeader("node count", -3))
        ));
        assert!(matches!(
            parse("3 -1\n"),
            Err(Error::NegativeHeader("edge count", -1))
        ));
        assert!(matches!(parse(""), Err(Error::Parse(_))));
        assert!(matches!(parse("3"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_syntax_error() {
        assert!(matches!(parse("3 2\n1 2\n2 x\n"), Err(Error::Parse(_))));
        assert!(matches!(parse("3 2\n1 2\n2\n"), Err(Error::Parse(_))));
        assert!(matches!(
            parse("3 1\n1 99999999999999999999\n"),
            Err(Error::InvalidNumber(_))
        ));
    }
}
