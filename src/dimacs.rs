use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_until};
use nom::character::complete::{digit1, line_ending, space0, space1};
use nom::combinator::{map_res, opt};
use nom::multi::many0;
use nom::sequence::{pair, preceded, separated_pair, terminated};

use crate::graph::VertexId;

/// reads an instance from file, returns (n,m,adj_list)
pub fn read_from_file(filename:&str) -> (usize, usize, Vec<Vec<VertexId>>) {
    let s1 = fs::read_to_string(filename)
        .unwrap_or_else(|_| panic!("read_from_file: unable to read {}", filename))
        .replace('\r', "");
    let s2 = skip_comments(s1.as_str()).unwrap().0;
    let (mut s3,(n,m)) = read_header(s2)
        .unwrap_or_else(|_| panic!("read_from_file: invalid header in {}", filename));
    let mut adj_list = vec![Vec::new();n];
    let mut check_nb_edges = 0;
    while match read_edge(s3) {
        Ok((tmp,(a,b))) => {
            assert!((1..=n).contains(&a), "edge endpoint {} outside [1,{}]", a, n);
            assert!((1..=n).contains(&b), "edge endpoint {} outside [1,{}]", b, n);
            s3 = tmp;
            adj_list[a-1].push(b-1);
            adj_list[b-1].push(a-1);
            check_nb_edges += 1;
            true
        }
        Err(_) => false
    } {}
    assert!(
        check_nb_edges == m || 2*check_nb_edges == m,
        "check: {}\t m: {}", check_nb_edges, m
    );
    (n, m, adj_list)
}

/// skips a single comment line
fn skip_comment(s:&str) -> IResult<&str, &str> {
    preceded(tag("c"), terminated(take_until("\n"), tag("\n")))(s)
}

/// skips all comments
pub fn skip_comments(s:&str) -> IResult<&str, Vec<&str>> {
    many0(skip_comment)(s)
}

/// reads a single unsigned integer
fn read_usize(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |e:&str| e.parse::<usize>())(s)
}

/// reads two numbers separated by spaces, consuming a trailing end of line
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    terminated(
        separated_pair(read_usize, space1, read_usize),
        pair(space0, opt(line_ending))
    )(s)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(alt((tag("p edge "), tag("p col "))), read_two_integers)(s)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(tag("e "), read_two_integers)(s)
}

/** builds the DIMACS text of an instance (edges given with 0-based ids) */
pub fn instance_to_string(n:usize, edges:&[(VertexId,VertexId)]) -> String {
    let mut res = format!("p edge {} {}\n", n, edges.len());
    for (a,b) in edges {
        res += format!("e {} {}\n", a+1, b+1).as_str();
    }
    res
}

/** writes an instance into a DIMACS file (edges given with 0-based ids) */
pub fn write_instance(filename:&str, n:usize, edges:&[(VertexId,VertexId)]) {
    fs::write(filename, instance_to_string(n, edges))
        .unwrap_or_else(|_|
            panic!("write_instance: unable to write the instance in {}", filename)
        );
}
