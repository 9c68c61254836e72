//! Input line classification
//!
//! A line is a command invocation only if its very first character is the
//! sentinel. Leading whitespace is not skipped: `" @spawn"` is plain text.
//! Parsing never fails; it only classifies.

/// Marks an input line as a command invocation
pub const SENTINEL: char = '@';

/// A command name and its argument tokens, extracted from one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInvocation {
    /// First token with one leading sentinel removed (may be empty)
    pub command_name: String,
    /// Remaining tokens, in order, untransformed
    pub args: Vec<String>,
}

/// Result of classifying an input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The line does not start with the sentinel
    NotACommand,
    Invocation(ParsedInvocation),
}

impl ParseOutcome {
    pub fn invocation(&self) -> Option<&ParsedInvocation> {
        match self {
            ParseOutcome::Invocation(inv) => Some(inv),
            ParseOutcome::NotACommand => None,
        }
    }

    pub fn is_command(&self) -> bool {
        matches!(self, ParseOutcome::Invocation(_))
    }
}

/// Classify a raw input line and split it into name and arguments
///
/// Tokens are separated by runs of whitespace; there is no quoting or
/// escaping.
pub fn parse(input: &str) -> ParseOutcome {
    if !input.starts_with(SENTINEL) {
        return ParseOutcome::NotACommand;
    }

    let mut tokens = input.split_whitespace();
    // The sentinel is non-whitespace, so there is always a first token.
    let head = tokens.next().unwrap_or_default();
    let command_name = head.strip_prefix(SENTINEL).unwrap_or(head).to_string();
    let args = tokens.map(str::to_string).collect();

    ParseOutcome::Invocation(ParsedInvocation { command_name, args })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(input: &str) -> ParsedInvocation {
        match parse(input) {
            ParseOutcome::Invocation(inv) => inv,
            ParseOutcome::NotACommand => panic!("expected invocation for {:?}", input),
        }
    }

    #[test]
    fn test_name_and_args_split() {
        let inv = invocation("@spawn goblin 3");
        assert_eq!(inv.command_name, "spawn");
        assert_eq!(inv.args, vec!["goblin", "3"]);
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let inv = invocation("@speed \t  1.5   fast  ");
        assert_eq!(inv.command_name, "speed");
        assert_eq!(inv.args, vec!["1.5", "fast"]);
    }

    #[test]
    fn test_bare_sentinel_yields_empty_name() {
        let inv = invocation("@");
        assert_eq!(inv.command_name, "");
        assert!(inv.args.is_empty());
    }

    #[test]
    fn test_sentinel_followed_by_space() {
        let inv = invocation("@ spawn");
        assert_eq!(inv.command_name, "");
        assert_eq!(inv.args, vec!["spawn"]);
    }

    #[test]
    fn test_only_one_sentinel_is_stripped() {
        let inv = invocation("@@spawn");
        assert_eq!(inv.command_name, "@spawn");
    }

    #[test]
    fn test_quotes_are_not_special() {
        let inv = invocation("@say \"hello world\"");
        assert_eq!(inv.args, vec!["\"hello", "world\""]);
    }

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(parse("hello world"), ParseOutcome::NotACommand);
        assert_eq!(parse(""), ParseOutcome::NotACommand);
        assert_eq!(parse("spawn @goblin"), ParseOutcome::NotACommand);
    }

    #[test]
    fn test_leading_whitespace_is_not_trimmed() {
        assert_eq!(parse(" @spawn"), ParseOutcome::NotACommand);
        assert_eq!(parse("\t@spawn"), ParseOutcome::NotACommand);
    }
}
