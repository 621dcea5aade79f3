use std::sync::atomic::{AtomicUsize, Ordering};
use rand::Rng;
use crate::core::library::{LibraryError, LibraryResult};

// IsbnGenerator produces isbns that pass `is_valid_isbn`. It does not look at the store, so
// uniqueness is up to the caller.
pub trait IsbnGenerator: Sync + Send {
    fn generate(&self) -> String;
}

// digits after the 978 prefix and before the check digit
const BODY_DIGITS: usize = 8;

/// Random 978 isbn with a publisher group of 2 to 5 digits, a title group filling the rest of
/// the 12 digit body and a valid EAN-13 check digit.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIsbnGenerator;

impl IsbnGenerator for RandomIsbnGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        let group = random_digits(&mut rng, 1);
        let publisher_len = rng.gen_range(2..=5);
        let publisher = random_digits(&mut rng, publisher_len);
        let title = random_digits(&mut rng, BODY_DIGITS - publisher_len);
        let check = check_digit(format!("978{}{}{}", group, publisher, title).as_str());
        format!("978-{}-{}-{}-{}", group, publisher, title, check)
    }
}

/// Hands out the given isbns in order and wraps around, useful for deterministic catalogs.
/// The isbns are returned as given, the catalog still validates each one.
#[derive(Debug)]
pub struct SequenceIsbnGenerator {
    isbns: Vec<String>,
    next: AtomicUsize,
}

impl SequenceIsbnGenerator {
    pub fn new(isbns: &[&str]) -> LibraryResult<Self> {
        if isbns.is_empty() {
            return Err(LibraryError::validation("isbn sequence must not be empty", None));
        }
        Ok(Self {
            isbns: isbns.iter().map(|s| s.to_string()).collect(),
            next: AtomicUsize::new(0),
        })
    }
}

impl IsbnGenerator for SequenceIsbnGenerator {
    fn generate(&self) -> String {
        let ndx = self.next.fetch_add(1, Ordering::SeqCst) % self.isbns.len();
        self.isbns[ndx].clone()
    }
}

fn random_digits<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(b'0' + rng.gen_range(0..10u8))).collect()
}

// EAN-13 check digit over the first 12 digits, weights alternate 1 and 3
pub fn check_digit(digits: &str) -> u32 {
    let sum: u32 = digits.chars()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { d } else { d * 3 })
        .sum();
    (10 - sum % 10) % 10
}
