/// A line of user text split into command parts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInput {
    /// Lower-cased first token
    pub keyword: String,
    /// Everything after the keyword, trimmed
    pub args: String,
    /// First token of `args`
    pub index_arg: String,
    /// Remainder of `args` after `index_arg`, trimmed
    pub text_arg: String,
}

/// Parse a raw line into a `UserInput`. Never fails.
///
/// Only the two split points are trimmed; whitespace inside the text part is
/// kept as typed. A line that is nothing but a decimal number becomes an
/// index-only input with an empty keyword, so a view can offer "type the
/// number to open it" by registering a command under the empty keyword.
pub fn parse(raw: &str) -> UserInput {
    let line = raw.trim();
    let (keyword, rest) = split_first_token(line);
    let keyword = keyword.to_lowercase();
    let args = rest.trim();
    let (index_arg, text_arg) = split_first_token(args);

    if args.is_empty() && is_decimal(&keyword) {
        return UserInput {
            keyword: String::new(),
            args: keyword.clone(),
            index_arg: keyword,
            text_arg: String::new(),
        };
    }

    UserInput {
        keyword,
        args: args.to_string(),
        index_arg: index_arg.to_string(),
        text_arg: text_arg.trim().to_string(),
    }
}

fn split_first_token(s: &str) -> (&str, &str) {
    s.split_once(char::is_whitespace).unwrap_or((s, ""))
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
