use bookshelf_core::{Book, BookRepository, InMemoryBookRepository, RepoError};

fn book(title: &str, author: &str, isbn: &str) -> Book {
    Book::new(title, author, isbn).unwrap()
}

fn repo_with_books() -> InMemoryBookRepository {
    let mut repo = InMemoryBookRepository::new();
    repo.add_book(book("Fluent Python", "Luciano Ramalho", "978-8575225027"))
        .unwrap();
    repo.add_book(book("Clean Code", "Robert C. Martin", "978-0132350884"))
        .unwrap();
    repo
}

#[test]
fn new_repository_is_empty() {
    let repo = InMemoryBookRepository::new();

    assert!(repo.is_empty());
    assert_eq!(repo.len(), 0);
    assert!(repo.list_books().is_empty());
}

#[test]
fn add_then_list_returns_the_book() {
    let mut repo = InMemoryBookRepository::new();
    let ddd = book("Domain-Driven Design", "Eric Evans", "978-0321125217");

    repo.add_book(ddd.clone()).unwrap();

    let books = repo.list_books();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0], ddd);
    assert_eq!(books[0].title(), "Domain-Driven Design");
}

#[test]
fn duplicate_isbn_is_rejected_and_size_kept() {
    let mut repo = InMemoryBookRepository::new();
    repo.add_book(book("Domain-Driven Design", "Eric Evans", "978-0321125217"))
        .unwrap();

    let err = repo
        .add_book(book("Duplicate Title", "Duplicate Author", "978-0321125217"))
        .unwrap_err();

    assert_eq!(err, RepoError::DuplicateIsbn("978-0321125217".to_string()));
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.list_books()[0].title(), "Domain-Driven Design");
}

#[test]
fn list_preserves_insertion_order() {
    let repo = repo_with_books();

    let isbns = repo
        .list_books()
        .iter()
        .map(|book| book.isbn().to_string())
        .collect::<Vec<_>>();
    assert_eq!(isbns, vec!["978-8575225027", "978-0132350884"]);
}

#[test]
fn list_returns_independent_copy() {
    let repo = repo_with_books();

    let mut snapshot = repo.list_books();
    snapshot.clear();
    snapshot.push(book("Injected", "Nobody", "000"));

    let mut second = repo.list_books();
    assert_eq!(second.len(), 2);
    assert!(!second.iter().any(|b| b.isbn() == "000"));

    second[0].mark_as_read();
    assert!(!repo.list_books()[0].is_read());
}

#[test]
fn mark_as_read_flips_only_the_target() {
    let mut repo = repo_with_books();

    repo.mark_as_read("978-8575225027").unwrap();

    let books = repo.list_books();
    assert!(books[0].is_read());
    assert!(!books[1].is_read());

    repo.mark_as_read("978-8575225027").unwrap();
    assert!(repo.list_books()[0].is_read());
}

#[test]
fn mark_as_read_missing_isbn_returns_not_found() {
    let mut repo = repo_with_books();
    let before = repo.list_books();

    let err = repo.mark_as_read("999-9999999999").unwrap_err();

    assert_eq!(err, RepoError::NotFound("999-9999999999".to_string()));
    assert_eq!(err.to_string(), "book not found: 999-9999999999");
    let after = repo.list_books();
    assert_eq!(after, before);
    assert!(after.iter().all(|book| !book.is_read()));
}

#[test]
fn remove_existing_book_shrinks_catalog() {
    let mut repo = repo_with_books();
    let target = repo.list_books()[0].clone();

    repo.remove_book(target.isbn()).unwrap();

    assert_eq!(repo.len(), 1);
    assert!(!repo.list_books().contains(&target));
    assert!(repo.get_book(target.isbn()).is_none());
}

#[test]
fn remove_missing_isbn_returns_not_found() {
    let mut repo = repo_with_books();

    let err = repo.remove_book("999-9999999999").unwrap_err();

    assert!(matches!(err, RepoError::NotFound(ref isbn) if isbn == "999-9999999999"));
    assert_eq!(repo.len(), 2);
}

#[test]
fn removed_isbn_can_be_added_again() {
    let mut repo = repo_with_books();

    repo.remove_book("978-0132350884").unwrap();
    repo.add_book(book("Clean Code (2nd ed.)", "Robert C. Martin", "978-0132350884"))
        .unwrap();

    let books = repo.list_books();
    assert_eq!(books.len(), 2);
    assert_eq!(books[1].title(), "Clean Code (2nd ed.)");
}
