//! Response bodies sent to clients.
//!
//! The front-end matches on these strings, so they are part of the wire
//! contract and must not be reworded.

pub const NOTHING_FOUND: &str = "Ничего не найдено!";
pub const INDEX_NOT_FOUND: &str = "Файл не был обнаружен!";

pub const MALFORMED_BODY: &str = "Ошибка в формате данных!";
pub const REQUIRED_FIELDS: &str = "Ошибка: Название, автор и категория обязательны!";
pub const BOOK_CREATED: &str = "Новая книга успешно добавлена";

pub const BOOK_NOT_FOUND: &str = "Такой книги не нашлось!";
pub const BOOK_MARKED_READ: &str = "Статус книги обновлен!";

pub const NO_BOOK_WITH_ID: &str = "Книги с таким ID нету!";
pub const BOOK_DELETED: &str = "Книга успешно удалена!";

pub const SERVER_ERROR: &str = "Ошибка на стороне сервера";
