use crate::books::domain::model::BookEntity;

// isbn, title, author, publication year, available copies
const SAMPLE_BOOKS: [(&str, &str, &str, i32, u32); 10] = [
    ("978-3-16-148410-0", "The Great Gatsby", "F. Scott Fitzgerald", 1925, 12),
    ("978-0-7432-7356-5", "To Kill a Mockingbird", "Harper Lee", 1960, 5),
    ("978-0-452-28423-4", "1984", "George Orwell", 1949, 7),
    ("978-1-5011-9181-4", "Where the Crawdads Sing", "Delia Owens", 2018, 0),
    ("978-0-141-19054-3", "Pride and Prejudice", "Jane Austen", 1813, 10),
    ("978-0-307-27778-3", "The Road", "Cormac McCarthy", 2006, 4),
    ("978-0-06-112008-4", "Brave New World", "Aldous Huxley", 1932, 6),
    ("978-0-525-65829-9", "The Silent Patient", "Alex Michaelides", 2019, 9),
    ("978-0-553-21311-7", "A Game of Thrones", "George R.R. Martin", 1996, 3),
    ("978-1-4391-6734-7", "The Hunger Games", "Suzanne Collins", 2008, 15),
];

pub fn sample_books() -> Vec<BookEntity> {
    SAMPLE_BOOKS.iter()
        .map(|(isbn, title, author, year, copies)| BookEntity::new(isbn, title, author, *year, *copies))
        .collect()
}
