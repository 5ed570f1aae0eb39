use jiff::Timestamp;
use snipbin_core::models::snippet::Snippet;
use snipbin_storage::error::GetError;
use snipbin_storage::memory::MemorySnippetRepository;
use snipbin_storage::repository::SnippetRepository;
use uuid::Uuid;

fn snippet() -> Snippet {
    Snippet {
        id: Uuid::new_v4(),
        title: "title".to_string(),
        contents: "contents".to_string(),
        created_at: Timestamp::from_second(1_700_000_000).unwrap(),
        format: Some("txt".to_string()),
        expires_at: None,
    }
}

#[tokio::test]
async fn inserted_snippet_can_be_fetched() {
    let repository = MemorySnippetRepository::new();
    let snippet = snippet();

    repository.insert(&snippet).await.unwrap();

    assert_eq!(repository.get(snippet.id).await, Ok(snippet));
}

#[tokio::test]
async fn repeated_gets_return_the_same_snippet() {
    let repository = MemorySnippetRepository::new();
    let snippet = snippet();
    repository.insert(&snippet).await.unwrap();

    let first = repository.get(snippet.id).await.unwrap();
    let second = repository.get(snippet.id).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let repository = MemorySnippetRepository::new();
    let id = Uuid::new_v4();

    assert_eq!(repository.get(id).await, Err(GetError::NotFound(id)));
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn usable_as_trait_object() {
    let repository: Box<dyn SnippetRepository> = Box::new(MemorySnippetRepository::new());
    let snippet = snippet();

    repository.insert(&snippet).await.unwrap();

    assert_eq!(repository.get(snippet.id).await.unwrap().contents, "contents");
}

#[test]
fn not_found_message_names_the_id() {
    let id = Uuid::nil();
    assert_eq!(
        GetError::NotFound(id).to_string(),
        "Snippet with id '00000000-0000-0000-0000-000000000000' not found"
    );
}
