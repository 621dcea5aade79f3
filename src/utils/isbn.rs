use lazy_static::lazy_static;
use regex::Regex;

pub const ISBN_PATTERN: &str = r"^978-\d-\d{2,5}-\d{1,7}-\d$";

lazy_static! {
    static ref ISBN_REGEX: Regex = Regex::new(ISBN_PATTERN).expect("invalid isbn pattern");
}

/// Checks the hyphenated `978-D-DD[DDD]-D[DDDDDD]-D` shape. The whole string must match and
/// nothing is normalized, so surrounding whitespace or other separators are rejected.
/// An absent value is never valid.
pub fn is_valid_isbn(isbn: Option<&str>) -> bool {
    match isbn {
        Some(isbn) => is_ascii_shape(isbn) && ISBN_REGEX.is_match(isbn),
        None => false,
    }
}

pub fn is_invalid_isbn(isbn: Option<&str>) -> bool {
    !is_valid_isbn(isbn)
}

// `\d` is unicode aware in the regex crate, the accepted digits are ASCII only.
fn is_ascii_shape(isbn: &str) -> bool {
    isbn.bytes().all(|b| b.is_ascii_digit() || b == b'-')
}
