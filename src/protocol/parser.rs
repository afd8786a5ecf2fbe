//! Reply parsers
//!
//! One parsing function per reply grammar. Each function consumes exactly
//! one command's reply block from the stream, up to and including its
//! terminating line, and produces structured results or a typed error.
//!
//! All functions are generic over [`BufRead`] so the grammars can be
//! exercised against in-memory buffers as well as live sockets.

use std::collections::BTreeMap;
use std::io::BufRead;

use crate::error::{DictError, Result};
use crate::model::{Database, Definition, MatchingStrategy};

use super::reply::{read_line, status, strip_quotes, Reply};

/// Read the next line, treating end of stream as a protocol violation
///
/// The server is only allowed to close the connection mid-exchange on
/// error, so a missing line inside a reply block is always a failure.
fn require_line<R: BufRead>(reader: &mut R) -> Result<String> {
    read_line(reader)?.ok_or_else(|| {
        DictError::Protocol("unexpected end of stream inside a reply block".to_string())
    })
}

/// Read and classify the first line of a reply block
fn read_status_line<R: BufRead>(reader: &mut R) -> Result<Reply> {
    let line = require_line(reader)?;
    Reply::parse(&line)
        .ok_or_else(|| DictError::Protocol(format!("expected a status line, got: {}", line)))
}

fn unexpected(reply: &Reply) -> DictError {
    DictError::Protocol(format!("unexpected reply: {}", reply.line()))
}

/// Leading decimal count on a status line, when the server supplies one
fn leading_count(text: &str) -> Option<usize> {
    text.split_whitespace().next()?.parse().ok()
}

/// Split a listing data line of the shape `<name> "<description>"`
///
/// Returns `None` for lines that do not match the shape; the listing
/// grammars skip those silently.
fn split_listing_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    let (name, rest) = line.split_once(char::is_whitespace)?;
    let rest = rest.trim_start();
    if name.is_empty() || rest.len() < 2 || !rest.starts_with('"') || !rest.ends_with('"') {
        return None;
    }
    Some((name, strip_quotes(rest)))
}

/// Consume listing data lines until the terminating `250`
///
/// Invokes `entry(name, quoted_text)` for each well-formed line and skips
/// malformed ones.
fn parse_listing<R: BufRead>(
    reader: &mut R,
    mut entry: impl FnMut(&str, &str),
) -> Result<()> {
    loop {
        let line = require_line(reader)?;
        if let Some(reply) = Reply::parse(&line) {
            if reply.code == status::COMMAND_COMPLETE {
                return Ok(());
            }
        }
        if let Some((name, text)) = split_listing_line(&line) {
            entry(name, text);
        }
    }
}

// =============================================================================
// Handshake
// =============================================================================

/// Parse the single-line welcome banner, requiring status 220
///
/// Returns the banner text. Every failure here, including a read error or
/// a closed stream, is a handshake failure.
pub fn parse_banner<R: BufRead>(reader: &mut R) -> Result<String> {
    let line = match read_line(reader) {
        Ok(Some(line)) => line,
        Ok(None) => {
            return Err(DictError::Handshake(
                "no welcome banner received from server".to_string(),
            ))
        }
        Err(e) => {
            return Err(DictError::Handshake(format!(
                "failed to read welcome banner: {}",
                e
            )))
        }
    };
    match Reply::parse(&line) {
        Some(reply) if reply.code == status::BANNER => Ok(reply.text),
        _ => Err(DictError::Handshake(format!(
            "unexpected welcome banner: {}",
            line
        ))),
    }
}

// =============================================================================
// DEFINE
// =============================================================================

/// Parse a DEFINE reply into an ordered list of definitions
///
/// Grammar: `150` (or `550`/`552`, yielding an empty list), then one `151`
/// header per definition followed by its body lines, terminated by `250`.
/// The count the server announces on the `150` line is validated against
/// the number of `151` headers received.
pub fn parse_definitions<R: BufRead>(reader: &mut R) -> Result<Vec<Definition>> {
    let head = read_status_line(reader)?;
    match head.code {
        status::DEFINITIONS_FOLLOW => {}
        status::NO_MATCH | status::INVALID_DATABASE => return Ok(Vec::new()),
        _ => return Err(unexpected(&head)),
    }
    let declared = leading_count(&head.text);

    let mut definitions: Vec<Definition> = Vec::new();
    loop {
        let line = require_line(reader)?;
        match Reply::parse(&line) {
            Some(reply) if reply.code == status::COMMAND_COMPLETE => break,
            Some(reply) if reply.code == status::DEFINITION_FOLLOWS => {
                definitions.push(definition_header(&reply)?);
            }
            _ => {
                // Body lines before the first 151 header have no home and
                // are dropped.
                if let Some(current) = definitions.last_mut() {
                    current.append_line(line);
                }
            }
        }
    }

    if let Some(count) = declared {
        if count != definitions.len() {
            return Err(DictError::Protocol(format!(
                "server announced {} definitions but sent {}",
                count,
                definitions.len()
            )));
        }
    }
    Ok(definitions)
}

/// Split a `151` header into its three fields: quoted headword, database
/// name, quoted database description
fn definition_header(reply: &Reply) -> Result<Definition> {
    let mut fields = reply.text.splitn(3, ' ');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(word), Some(database), Some(_description)) if !word.is_empty() && !database.is_empty() => {
            Ok(Definition::new(strip_quotes(word), database))
        }
        _ => Err(DictError::Protocol(format!(
            "malformed definition header: {}",
            reply.line()
        ))),
    }
}

// =============================================================================
// MATCH
// =============================================================================

/// Parse a MATCH reply into an order-preserving, duplicate-free word list
///
/// Grammar: `152` (or `550`/`552`, yielding an empty list), then data
/// lines of the shape `<database> "<word>"`, terminated by `250`. The
/// announced count is validated against the number of well-formed data
/// lines received, before duplicates are collapsed.
pub fn parse_matches<R: BufRead>(reader: &mut R) -> Result<Vec<String>> {
    let head = read_status_line(reader)?;
    match head.code {
        status::MATCHES_FOLLOW => {}
        status::NO_MATCH | status::INVALID_DATABASE => return Ok(Vec::new()),
        _ => return Err(unexpected(&head)),
    }
    let declared = leading_count(&head.text);

    let mut words: Vec<String> = Vec::new();
    let mut received = 0usize;
    parse_listing(reader, |_database, word| {
        received += 1;
        if !words.iter().any(|w| w == word) {
            words.push(word.to_string());
        }
    })?;

    if let Some(count) = declared {
        if count != received {
            return Err(DictError::Protocol(format!(
                "server announced {} matches but sent {}",
                count, received
            )));
        }
    }
    Ok(words)
}

// =============================================================================
// SHOW DATABASES / SHOW STRAT
// =============================================================================

/// Parse a SHOW DATABASES reply into a name-keyed map
///
/// Grammar: `110`, then `<name> "<description>"` lines, terminated by
/// `250`. A later line repeating a name overwrites the earlier entry.
pub fn parse_databases<R: BufRead>(reader: &mut R) -> Result<BTreeMap<String, Database>> {
    let head = read_status_line(reader)?;
    if head.code != status::DATABASES_FOLLOW {
        return Err(unexpected(&head));
    }

    let mut databases = BTreeMap::new();
    parse_listing(reader, |name, description| {
        databases.insert(name.to_string(), Database::new(name, description));
    })?;
    Ok(databases)
}

/// Parse a SHOW STRAT reply into an insertion-ordered, duplicate-free list
///
/// Grammar: `111`, then `<name> "<description>"` lines, terminated by
/// `250`.
pub fn parse_strategies<R: BufRead>(reader: &mut R) -> Result<Vec<MatchingStrategy>> {
    let head = read_status_line(reader)?;
    if head.code != status::STRATEGIES_FOLLOW {
        return Err(unexpected(&head));
    }

    let mut strategies: Vec<MatchingStrategy> = Vec::new();
    parse_listing(reader, |name, description| {
        if !strategies.iter().any(|s| s.name() == name) {
            strategies.push(MatchingStrategy::new(name, description));
        }
    })?;
    Ok(strategies)
}

// =============================================================================
// SHOW INFO
// =============================================================================

/// Parse a SHOW INFO reply into one free-form text blob
///
/// Grammar: `112` (or `550`, yielding an empty string), then verbatim body
/// lines joined with newlines, terminated by `250`. Body lines are not
/// filtered by the quoted-pair shape the listing commands use, and the
/// result carries no trailing newline.
pub fn parse_database_info<R: BufRead>(reader: &mut R) -> Result<String> {
    let head = read_status_line(reader)?;
    match head.code {
        status::INFO_FOLLOWS => {}
        status::INVALID_DATABASE => return Ok(String::new()),
        _ => return Err(unexpected(&head)),
    }

    let mut info = String::new();
    loop {
        let line = require_line(reader)?;
        if let Some(reply) = Reply::parse(&line) {
            if reply.code == status::COMMAND_COMPLETE {
                break;
            }
        }
        info.push_str(&line);
        info.push('\n');
    }
    if info.ends_with('\n') {
        info.pop();
    }
    Ok(info)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn stream(text: &str) -> Cursor<Vec<u8>> {
        Cursor::new(text.as_bytes().to_vec())
    }

    // -------------------------------------------------------------------------
    // Banner
    // -------------------------------------------------------------------------

    #[test]
    fn test_banner_accepted() {
        let mut reply = stream("220 dict.dict.org dictd 1.12.1 <auth.mime>\r\n");
        let banner = parse_banner(&mut reply).unwrap();
        assert_eq!(banner, "dict.dict.org dictd 1.12.1 <auth.mime>");
    }

    #[test]
    fn test_banner_wrong_status_is_handshake_error() {
        let mut reply = stream("550 unavailable\r\n");
        let err = parse_banner(&mut reply).unwrap_err();
        assert!(matches!(err, DictError::Handshake(_)), "{:?}", err);
    }

    #[test]
    fn test_banner_missing_is_handshake_error() {
        let mut reply = stream("");
        let err = parse_banner(&mut reply).unwrap_err();
        assert!(matches!(err, DictError::Handshake(_)), "{:?}", err);
    }

    // -------------------------------------------------------------------------
    // DEFINE
    // -------------------------------------------------------------------------

    #[test]
    fn test_definitions_two_blocks() {
        let mut reply = stream(
            "150 2 definitions found\n\
             151 \"cat\" wn \"WordNet\"\n\
             feline mammal\n\
             151 \"cat\" gcide \"GCIDE\"\n\
             large desk\n\
             250 ok\n",
        );
        let defs = parse_definitions(&mut reply).unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].word(), "cat");
        assert_eq!(defs[0].database(), "wn");
        assert_eq!(defs[0].lines(), ["feline mammal"]);
        assert_eq!(defs[1].word(), "cat");
        assert_eq!(defs[1].database(), "gcide");
        assert_eq!(defs[1].lines(), ["large desk"]);
    }

    #[test]
    fn test_definitions_body_preserves_internal_whitespace() {
        let mut reply = stream(
            "150 1 definitions found\r\n151 \"cat\" wn \"WordNet\"\r\ncat\r\n     n 1: feline mammal\r\n\r\n250 ok\r\n",
        );
        let defs = parse_definitions(&mut reply).unwrap();
        assert_eq!(defs[0].lines(), ["cat", "     n 1: feline mammal", ""]);
    }

    #[test]
    fn test_definitions_no_match_is_empty() {
        let mut reply = stream("552 no match\n");
        assert!(parse_definitions(&mut reply).unwrap().is_empty());
    }

    #[test]
    fn test_definitions_invalid_database_is_empty() {
        let mut reply = stream("550 invalid database\n");
        assert!(parse_definitions(&mut reply).unwrap().is_empty());
    }

    #[test]
    fn test_definitions_unexpected_status_is_protocol_error() {
        let mut reply = stream("500 syntax error\n");
        let err = parse_definitions(&mut reply).unwrap_err();
        assert!(matches!(err, DictError::Protocol(_)), "{:?}", err);
    }

    #[test]
    fn test_definitions_truncated_stream_is_protocol_error() {
        let mut reply = stream("150 1 definitions found\n151 \"cat\" wn \"WordNet\"\nbody\n");
        let err = parse_definitions(&mut reply).unwrap_err();
        assert!(matches!(err, DictError::Protocol(_)), "{:?}", err);
    }

    #[test]
    fn test_definitions_malformed_header_is_protocol_error() {
        let mut reply = stream("150 1 definitions found\n151 \"cat\"\n250 ok\n");
        let err = parse_definitions(&mut reply).unwrap_err();
        assert!(matches!(err, DictError::Protocol(_)), "{:?}", err);
    }

    #[test]
    fn test_definitions_count_mismatch_is_protocol_error() {
        let mut reply = stream("150 3 definitions found\n151 \"cat\" wn \"WordNet\"\nbody\n250 ok\n");
        let err = parse_definitions(&mut reply).unwrap_err();
        assert!(matches!(err, DictError::Protocol(_)), "{:?}", err);
    }

    #[test]
    fn test_definitions_unparseable_count_is_tolerated() {
        let mut reply = stream("150 definitions follow\n151 \"cat\" wn \"WordNet\"\nbody\n250 ok\n");
        let defs = parse_definitions(&mut reply).unwrap();
        assert_eq!(defs.len(), 1);
    }

    // -------------------------------------------------------------------------
    // MATCH
    // -------------------------------------------------------------------------

    #[test]
    fn test_matches_single() {
        let mut reply = stream("152 1 matches found\nwn \"cats\"\n250 ok\n");
        assert_eq!(parse_matches(&mut reply).unwrap(), ["cats"]);
    }

    #[test]
    fn test_matches_deduplicated_in_first_seen_order() {
        let mut reply = stream(
            "152 4 matches found\n\
             wn \"cat\"\n\
             gcide \"cat\"\n\
             wn \"cats\"\n\
             wn \"cat\"\n\
             250 ok\n",
        );
        assert_eq!(parse_matches(&mut reply).unwrap(), ["cat", "cats"]);
    }

    #[test]
    fn test_matches_no_match_is_empty() {
        let mut reply = stream("552 no match\n");
        assert!(parse_matches(&mut reply).unwrap().is_empty());
    }

    #[test]
    fn test_matches_malformed_lines_skipped() {
        let mut reply = stream(
            "152 2 matches found\n\
             not a match line\n\
             wn \"cat\"\n\
             wn \"cats\"\n\
             250 ok\n",
        );
        assert_eq!(parse_matches(&mut reply).unwrap(), ["cat", "cats"]);
    }

    #[test]
    fn test_matches_count_mismatch_is_protocol_error() {
        let mut reply = stream("152 2 matches found\nwn \"cat\"\n250 ok\n");
        let err = parse_matches(&mut reply).unwrap_err();
        assert!(matches!(err, DictError::Protocol(_)), "{:?}", err);
    }

    // -------------------------------------------------------------------------
    // SHOW DATABASES / SHOW STRAT
    // -------------------------------------------------------------------------

    #[test]
    fn test_databases_keyed_by_name() {
        let mut reply = stream("110 1 databases present\nwn \"WordNet (r) 3.0\"\n250 ok\n");
        let databases = parse_databases(&mut reply).unwrap();
        assert_eq!(databases.len(), 1);
        assert_eq!(databases["wn"].name(), "wn");
        assert_eq!(databases["wn"].description(), "WordNet (r) 3.0");
    }

    #[test]
    fn test_databases_later_duplicate_overwrites() {
        let mut reply = stream(
            "110 2 databases present\n\
             wn \"old description\"\n\
             wn \"new description\"\n\
             250 ok\n",
        );
        let databases = parse_databases(&mut reply).unwrap();
        assert_eq!(databases.len(), 1);
        assert_eq!(databases["wn"].description(), "new description");
    }

    #[test]
    fn test_databases_reparse_is_idempotent() {
        let text = "110 2 databases present\nwn \"WordNet\"\ngcide \"GCIDE\"\n250 ok\n";
        let first = parse_databases(&mut stream(text)).unwrap();
        let second = parse_databases(&mut stream(text)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_databases_wrong_status_is_protocol_error() {
        let mut reply = stream("111 2 strategies available\n250 ok\n");
        let err = parse_databases(&mut reply).unwrap_err();
        assert!(matches!(err, DictError::Protocol(_)), "{:?}", err);
    }

    #[test]
    fn test_strategies_insertion_ordered_and_deduplicated() {
        let mut reply = stream(
            "111 3 strategies available\n\
             exact \"Match headwords exactly\"\n\
             prefix \"Match prefixes\"\n\
             exact \"repeated\"\n\
             250 ok\n",
        );
        let strategies = parse_strategies(&mut reply).unwrap();
        let names: Vec<&str> = strategies.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["exact", "prefix"]);
        assert_eq!(strategies[0].description(), "Match headwords exactly");
    }

    // -------------------------------------------------------------------------
    // SHOW INFO
    // -------------------------------------------------------------------------

    #[test]
    fn test_info_verbatim_blob_without_trailing_newline() {
        let mut reply = stream(
            "112 information follows\n\
             WordNet is a lexical database.\n\
             \n\
             Princeton University\n\
             250 ok\n",
        );
        let info = parse_database_info(&mut reply).unwrap();
        assert_eq!(info, "WordNet is a lexical database.\n\nPrinceton University");
    }

    #[test]
    fn test_info_lines_not_filtered_by_listing_shape() {
        let mut reply = stream("112 information follows\nname \"quoted like a listing\"\n250 ok\n");
        let info = parse_database_info(&mut reply).unwrap();
        assert_eq!(info, "name \"quoted like a listing\"");
    }

    #[test]
    fn test_info_empty_body() {
        let mut reply = stream("112 information follows\n250 ok\n");
        assert_eq!(parse_database_info(&mut reply).unwrap(), "");
    }

    #[test]
    fn test_info_invalid_database_is_empty() {
        let mut reply = stream("550 invalid database\n");
        assert_eq!(parse_database_info(&mut reply).unwrap(), "");
    }
}
