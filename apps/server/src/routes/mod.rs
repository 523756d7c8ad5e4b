mod feed;
mod health;
mod websites;

macros_utils::routes! {
    module health,
    module feed,
    module websites,
}
