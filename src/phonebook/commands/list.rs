use crate::book::{AddressBook, Pages};

/// Lists the book page by page; see [`AddressBook::paginate`].
pub fn run(book: &AddressBook, page_size: Option<usize>) -> Pages<'_> {
    book.paginate(page_size)
}
