use std::convert::TryFrom;
use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, line_ending, not_line_ending, space0, space1, multispace1};
use nom::combinator::{map_res, opt};
use nom::sequence::{preceded, terminated, tuple};

use log::debug;

use crate::color::ColoringInstance;
use crate::error::InputError;
use crate::graph::{check_nb_vertices, Graph};


/// reads a DIMACS instance from a file
pub fn read_from_file(filename:&str) -> Result<Graph, InputError> {
    let content = fs::read_to_string(filename)?;
    let res = parse_dimacs(content.as_str())?;
    debug!("read {}: {} vertices, {} edges", filename, res.nb_vertices(), res.nb_edges());
    Ok(res)
}

/** parses a DIMACS instance: comment lines ('c'), a header ('p edge n m' or 'p col n m'),
then one line per edge ('e u v', indices starting at 1). */
pub fn parse_dimacs(content:&str) -> Result<Graph, InputError> {
    let s1 = content.replace("\r", "");
    let (s2, _) = skip_blanks_and_comments(s1.as_str()).map_err(|_| syntax_error(s1.as_str()))?;
    let (mut s3, (n,m)) = read_header(s2).map_err(|_| syntax_error(s2))?;
    check_nb_vertices(n)?;
    // the header is not trusted to size the edge list
    let mut edges:Vec<(i64,i64)> = Vec::new();
    loop {
        let (remaining, _) = skip_blanks_and_comments(s3).map_err(|_| syntax_error(s3))?;
        match read_edge(remaining) {
            Ok((tmp, (a,b))) => {
                s3 = tmp;
                // WARNING: indices start at 1 in the DIMACS format
                edges.push((to_index(a), to_index(b)));
            },
            Err(_) => {
                if !remaining.is_empty() { return Err(syntax_error(remaining)); }
                break;
            }
        }
    }
    // some generators count each edge twice
    if edges.len() != m && 2*edges.len() != m {
        return Err(InputError::EdgeCountMismatch { expected: m, found: edges.len() });
    }
    Graph::from_signed(n as i64, &edges)
}

/// 1-based DIMACS index to a 0-based index (out of range values give -1, rejected later)
fn to_index(a:usize) -> i64 {
    i64::try_from(a).map_or(-1, |a| a - 1)
}

/// error pointing at the beginning of the unparsed content
fn syntax_error(s:&str) -> InputError {
    InputError::DimacsSyntax(s.lines().next().unwrap_or("").to_string())
}

/// skips a single comment
fn skip_comment(s:&str) -> IResult<&str, &str> {
    preceded(tag("c"), terminated(not_line_ending, opt(line_ending)))(s)
}

/// skips all comments
pub fn skip_comments(s:&str) -> IResult<&str, Vec<&str>> {
    nom::multi::many0(skip_comment)(s)
}

/// skips comments, blank lines and spaces
fn skip_blanks_and_comments(s:&str) -> IResult<&str, Vec<&str>> {
    nom::multi::many0(alt((skip_comment, multispace1)))(s)
}

/// reads a positive integer
fn read_integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads two numbers separated by spaces, and the end of the line
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    let (remaining, (_, n1, _, n2, _, _)) = tuple((
        space1, read_integer, space1, read_integer, space0, opt(line_ending)
    ))(s)?;
    Ok((remaining, (n1, n2)))
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(alt((tag("p edge"), tag("p col"))), read_two_integers)(s)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(tag("e"), read_two_integers)(s)
}

/** writes an instance in the DIMACS format */
pub fn to_dimacs_string(inst:&dyn ColoringInstance) -> String {
    let mut res = format!("p edge {} {}\n", inst.nb_vertices(), inst.nb_edges());
    for (u,v) in inst.edges() {
        res += format!("e {} {}\n", u+1, v+1).as_str();
    }
    res
}

/** writes an instance into a DIMACS file */
pub fn write_to_file(inst:&dyn ColoringInstance, filename:&str) -> Result<(), InputError> {
    fs::write(filename, to_dimacs_string(inst))?;
    Ok(())
}
