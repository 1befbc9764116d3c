/// The calculator session and its two driver-facing operations.
///
/// Couples one token stream with one symbol table and exposes "evaluate the
/// next statement" and "recover after an error".
pub mod calculator;
/// Checked numeric primitives used by the grammar.
///
/// Division, remainder, `pow` and `sqrt`, each returning a runtime error
/// instead of producing a silent infinity or NaN where the calculator forbids
/// it.
///
/// # Responsibilities
/// - Rejects zero divisors for `/` and `%`.
/// - Narrows `pow` exponents to integers.
/// - Rejects negative `sqrt` operands.
pub mod evaluator;
/// The lexer module splits raw text into lexemes.
///
/// The lexer reads a slice of source text and produces number literals, words
/// and single-character operators, skipping whitespace. It does not know about
/// keywords or variables; that classification happens in the token stream.
///
/// # Responsibilities
/// - Recognizes floating-point literals with optional fraction and exponent.
/// - Recognizes alphanumeric words.
/// - Reports characters that start no token.
pub mod lexer;
/// The parser module evaluates statements while parsing them.
///
/// A recursive-descent grammar over the token stream: statement, expression,
/// term and primary. Values are computed on the way down, no syntax tree is
/// built.
///
/// # Responsibilities
/// - Implements operator precedence and associativity.
/// - Parses declarations and the `pow`/`sqrt` calls.
/// - Reports missing punctuation and names with line information.
pub mod parser;
/// Named values declared during a session.
pub mod symbol_table;
/// Token types handed from the token stream to the grammar.
pub mod token;
/// Lazily lexes a line-buffered input source into classified tokens, with one
/// token of pushback and skip-to-terminator recovery.
pub mod token_stream;
