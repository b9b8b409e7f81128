//! Token type definitions for the Moon lexer.
//!
//! A [`Token`] is a classified lexical unit. Only the literal-bearing
//! variants (identifiers, numbers, strings, comments) own a text payload;
//! keywords, operators and punctuation carry none, so a payload can never
//! appear on a kind that should not have one.
//!
//! [`TokenKind`] is the payload-free mirror of `Token`, used for kind
//! comparisons and for the canonical name lookup that diagnostic callers
//! rely on.

/// A lexical token produced by the scanner.
///
/// Literal payloads hold the exact source text of the literal, unparsed:
/// number tokens keep their digits (and prefix/exponent) verbatim, string
/// and comment tokens hold the text between their delimiters, with escape
/// backslashes passed through uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Reserved words
    /// The `and` keyword.
    And,
    /// The `break` keyword.
    Break,
    /// The `do` keyword.
    Do,
    /// The `else` keyword.
    Else,
    /// The `elseif` keyword.
    Elseif,
    /// The `end` keyword.
    End,
    /// The `false` keyword.
    False,
    /// The `for` keyword.
    For,
    /// The `function` keyword.
    Function,
    /// The `goto` keyword.
    Goto,
    /// The `if` keyword.
    If,
    /// The `in` keyword.
    In,
    /// The `local` keyword.
    Local,
    /// The `nil` keyword.
    Nil,
    /// The `not` keyword.
    Not,
    /// The `or` keyword.
    Or,
    /// The `repeat` keyword.
    Repeat,
    /// The `return` keyword.
    Return,
    /// The `then` keyword.
    Then,
    /// The `true` keyword.
    True,
    /// The `until` keyword.
    Until,
    /// The `while` keyword.
    While,

    // Literals
    /// An integer literal; payload is the unparsed source text.
    Int(String),
    /// A floating-point literal; payload is the unparsed source text.
    Float(String),
    /// A closed string literal; payload excludes the delimiters.
    StringLiteral(String),
    /// A string literal whose closing delimiter was never found.
    UnclosedStringLiteral(String),
    /// A generic identifier.
    Ident(String),

    // Comments
    /// A `--` comment running to the end of its line.
    ShortComment(String),
    /// A closed `--[[ ... ]]` comment; payload excludes the delimiters.
    LongComment(String),
    /// A long comment whose `]]` closer was never found.
    UnclosedLongComment(String),

    // Relational and assignment operators
    /// `=`
    Assign,
    /// `>=`
    GreaterEq,
    /// `<=`
    LessEq,
    /// `==`
    Eq,
    /// `~=`
    NotEq,
    /// `>`
    Greater,
    /// `<`
    Less,

    // Arithmetic and length operators
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
    /// `#`
    Len,

    // Brackets
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftCurly,
    /// `}`
    RightCurly,

    // Separators
    /// `..` (declared for completeness; see the `.` resolver)
    Concat,
    /// `...` (declared for completeness; see the `.` resolver)
    Dots,
    /// `::`
    DoubleColon,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `.`
    Attr,

    /// Internal: one whitespace character. Never present in the sequence
    /// returned by [`tokenize`](crate::tokenize).
    Whitespace,
    /// A character no rule matched; the scanner consumed exactly one
    /// character and moved on.
    Unidentified,
    /// End of input. Always the final token of a scan.
    Eof,
}

impl Token {
    /// Returns the payload-free kind of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::And => TokenKind::And,
            Token::Break => TokenKind::Break,
            Token::Do => TokenKind::Do,
            Token::Else => TokenKind::Else,
            Token::Elseif => TokenKind::Elseif,
            Token::End => TokenKind::End,
            Token::False => TokenKind::False,
            Token::For => TokenKind::For,
            Token::Function => TokenKind::Function,
            Token::Goto => TokenKind::Goto,
            Token::If => TokenKind::If,
            Token::In => TokenKind::In,
            Token::Local => TokenKind::Local,
            Token::Nil => TokenKind::Nil,
            Token::Not => TokenKind::Not,
            Token::Or => TokenKind::Or,
            Token::Repeat => TokenKind::Repeat,
            Token::Return => TokenKind::Return,
            Token::Then => TokenKind::Then,
            Token::True => TokenKind::True,
            Token::Until => TokenKind::Until,
            Token::While => TokenKind::While,
            Token::Int(_) => TokenKind::Int,
            Token::Float(_) => TokenKind::Float,
            Token::StringLiteral(_) => TokenKind::StringLiteral,
            Token::UnclosedStringLiteral(_) => TokenKind::UnclosedStringLiteral,
            Token::Ident(_) => TokenKind::Ident,
            Token::ShortComment(_) => TokenKind::ShortComment,
            Token::LongComment(_) => TokenKind::LongComment,
            Token::UnclosedLongComment(_) => TokenKind::UnclosedLongComment,
            Token::Assign => TokenKind::Assign,
            Token::GreaterEq => TokenKind::GreaterEq,
            Token::LessEq => TokenKind::LessEq,
            Token::Eq => TokenKind::Eq,
            Token::NotEq => TokenKind::NotEq,
            Token::Greater => TokenKind::Greater,
            Token::Less => TokenKind::Less,
            Token::Add => TokenKind::Add,
            Token::Sub => TokenKind::Sub,
            Token::Mul => TokenKind::Mul,
            Token::Div => TokenKind::Div,
            Token::Mod => TokenKind::Mod,
            Token::Pow => TokenKind::Pow,
            Token::Len => TokenKind::Len,
            Token::LeftParen => TokenKind::LeftParen,
            Token::RightParen => TokenKind::RightParen,
            Token::LeftBracket => TokenKind::LeftBracket,
            Token::RightBracket => TokenKind::RightBracket,
            Token::LeftCurly => TokenKind::LeftCurly,
            Token::RightCurly => TokenKind::RightCurly,
            Token::Concat => TokenKind::Concat,
            Token::Dots => TokenKind::Dots,
            Token::DoubleColon => TokenKind::DoubleColon,
            Token::Colon => TokenKind::Colon,
            Token::Comma => TokenKind::Comma,
            Token::Semicolon => TokenKind::Semicolon,
            Token::Attr => TokenKind::Attr,
            Token::Whitespace => TokenKind::Whitespace,
            Token::Unidentified => TokenKind::Unidentified,
            Token::Eof => TokenKind::Eof,
        }
    }

    /// Returns the owned text payload, if this token's kind carries one.
    pub fn payload(&self) -> Option<&str> {
        match self {
            Token::Int(s)
            | Token::Float(s)
            | Token::StringLiteral(s)
            | Token::UnclosedStringLiteral(s)
            | Token::Ident(s)
            | Token::ShortComment(s)
            | Token::LongComment(s)
            | Token::UnclosedLongComment(s) => Some(s),
            _ => None,
        }
    }
}

/// The closed set of token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Reserved words
    /// The `and` keyword.
    And,
    /// The `break` keyword.
    Break,
    /// The `do` keyword.
    Do,
    /// The `else` keyword.
    Else,
    /// The `elseif` keyword.
    Elseif,
    /// The `end` keyword.
    End,
    /// The `false` keyword.
    False,
    /// The `for` keyword.
    For,
    /// The `function` keyword.
    Function,
    /// The `goto` keyword.
    Goto,
    /// The `if` keyword.
    If,
    /// The `in` keyword.
    In,
    /// The `local` keyword.
    Local,
    /// The `nil` keyword.
    Nil,
    /// The `not` keyword.
    Not,
    /// The `or` keyword.
    Or,
    /// The `repeat` keyword.
    Repeat,
    /// The `return` keyword.
    Return,
    /// The `then` keyword.
    Then,
    /// The `true` keyword.
    True,
    /// The `until` keyword.
    Until,
    /// The `while` keyword.
    While,

    // Literals
    /// An integer literal.
    Int,
    /// A floating-point literal.
    Float,
    /// A closed string literal.
    StringLiteral,
    /// A string literal that was never closed.
    UnclosedStringLiteral,
    /// A generic identifier.
    Ident,

    // Comments
    /// A `--` comment running to the end of its line.
    ShortComment,
    /// A closed `--[[ ... ]]` comment.
    LongComment,
    /// A long comment whose `]]` closer was never found.
    UnclosedLongComment,

    // Relational and assignment operators
    /// `=`
    Assign,
    /// `>=`
    GreaterEq,
    /// `<=`
    LessEq,
    /// `==`
    Eq,
    /// `~=`
    NotEq,
    /// `>`
    Greater,
    /// `<`
    Less,

    // Arithmetic and length operators
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
    /// `#`
    Len,

    // Brackets
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftCurly,
    /// `}`
    RightCurly,

    // Separators
    /// `..` (declared for completeness; see the `.` resolver)
    Concat,
    /// `...` (declared for completeness; see the `.` resolver)
    Dots,
    /// `::`
    DoubleColon,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `.`
    Attr,

    // Sentinel and utility kinds
    /// A single consumed whitespace character.
    Whitespace,
    /// A character the scanner has no rule for.
    Unidentified,
    /// The terminal end-of-input marker.
    Eof,
}

impl TokenKind {
    /// Every member of the closed kind set, in declaration order.
    pub const ALL: [TokenKind; 60] = [
        TokenKind::And,
        TokenKind::Break,
        TokenKind::Do,
        TokenKind::Else,
        TokenKind::Elseif,
        TokenKind::End,
        TokenKind::False,
        TokenKind::For,
        TokenKind::Function,
        TokenKind::Goto,
        TokenKind::If,
        TokenKind::In,
        TokenKind::Local,
        TokenKind::Nil,
        TokenKind::Not,
        TokenKind::Or,
        TokenKind::Repeat,
        TokenKind::Return,
        TokenKind::Then,
        TokenKind::True,
        TokenKind::Until,
        TokenKind::While,
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::StringLiteral,
        TokenKind::UnclosedStringLiteral,
        TokenKind::Ident,
        TokenKind::ShortComment,
        TokenKind::LongComment,
        TokenKind::UnclosedLongComment,
        TokenKind::Assign,
        TokenKind::GreaterEq,
        TokenKind::LessEq,
        TokenKind::Eq,
        TokenKind::NotEq,
        TokenKind::Greater,
        TokenKind::Less,
        TokenKind::Add,
        TokenKind::Sub,
        TokenKind::Mul,
        TokenKind::Div,
        TokenKind::Mod,
        TokenKind::Pow,
        TokenKind::Len,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::LeftCurly,
        TokenKind::RightCurly,
        TokenKind::Concat,
        TokenKind::Dots,
        TokenKind::DoubleColon,
        TokenKind::Colon,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::Attr,
        TokenKind::Whitespace,
        TokenKind::Unidentified,
        TokenKind::Eof,
    ];

    /// Returns the canonical lowercase name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::And => "and",
            TokenKind::Break => "break",
            TokenKind::Do => "do",
            TokenKind::Else => "else",
            TokenKind::Elseif => "elseif",
            TokenKind::End => "end",
            TokenKind::False => "false",
            TokenKind::For => "for",
            TokenKind::Function => "function",
            TokenKind::Goto => "goto",
            TokenKind::If => "if",
            TokenKind::In => "in",
            TokenKind::Local => "local",
            TokenKind::Nil => "nil",
            TokenKind::Not => "not",
            TokenKind::Or => "or",
            TokenKind::Repeat => "repeat",
            TokenKind::Return => "return",
            TokenKind::Then => "then",
            TokenKind::True => "true",
            TokenKind::Until => "until",
            TokenKind::While => "while",
            TokenKind::Int => "int",
            TokenKind::Float => "float",
            TokenKind::StringLiteral => "string_literal",
            TokenKind::UnclosedStringLiteral => "unclosed_string_literal",
            TokenKind::Ident => "ident",
            TokenKind::ShortComment => "short_comment",
            TokenKind::LongComment => "long_comment",
            TokenKind::UnclosedLongComment => "unclosed_long_comment",
            TokenKind::Assign => "assign",
            TokenKind::GreaterEq => "greater_eq",
            TokenKind::LessEq => "less_eq",
            TokenKind::Eq => "eq",
            TokenKind::NotEq => "not_eq",
            TokenKind::Greater => "greater",
            TokenKind::Less => "less",
            TokenKind::Add => "add",
            TokenKind::Sub => "sub",
            TokenKind::Mul => "mul",
            TokenKind::Div => "div",
            TokenKind::Mod => "mod",
            TokenKind::Pow => "pow",
            TokenKind::Len => "len",
            TokenKind::LeftParen => "left_paren",
            TokenKind::RightParen => "right_paren",
            TokenKind::LeftBracket => "left_bracket",
            TokenKind::RightBracket => "right_bracket",
            TokenKind::LeftCurly => "left_curly",
            TokenKind::RightCurly => "right_curly",
            TokenKind::Concat => "concat",
            TokenKind::Dots => "dots",
            TokenKind::DoubleColon => "double_colon",
            TokenKind::Colon => "colon",
            TokenKind::Comma => "comma",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Attr => "attr",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Unidentified => "unidentified",
            TokenKind::Eof => "end_of_file",
        }
    }
}

/// Returns the canonical lowercase name of a token kind.
///
/// Total over [`TokenKind`]; intended for diagnostic and display use by
/// callers, the scanner itself never consults it.
///
/// # Example
///
/// ```
/// use moonc_lex::{token_kind_name, TokenKind};
///
/// assert_eq!(token_kind_name(TokenKind::GreaterEq), "greater_eq");
/// assert_eq!(token_kind_name(TokenKind::Eof), "end_of_file");
/// ```
pub const fn token_kind_name(kind: TokenKind) -> &'static str {
    kind.name()
}

/// Resolves identifier text to a reserved-word token.
///
/// Returns `None` when the text is not one of the 22 reserved words, in
/// which case the caller keeps it as a generic identifier.
pub fn keyword_from_ident(text: &str) -> Option<Token> {
    match text {
        "and" => Some(Token::And),
        "break" => Some(Token::Break),
        "do" => Some(Token::Do),
        "else" => Some(Token::Else),
        "elseif" => Some(Token::Elseif),
        "end" => Some(Token::End),
        "false" => Some(Token::False),
        "for" => Some(Token::For),
        "function" => Some(Token::Function),
        "goto" => Some(Token::Goto),
        "if" => Some(Token::If),
        "in" => Some(Token::In),
        "local" => Some(Token::Local),
        "nil" => Some(Token::Nil),
        "not" => Some(Token::Not),
        "or" => Some(Token::Or),
        "repeat" => Some(Token::Repeat),
        "return" => Some(Token::Return),
        "then" => Some(Token::Then),
        "true" => Some(Token::True),
        "until" => Some(Token::Until),
        "while" => Some(Token::While),
        _ => None,
    }
}
