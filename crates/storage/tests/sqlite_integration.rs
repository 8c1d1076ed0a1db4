use storage::repository::{CategoryRepository, NewQuestionRecord, QuestionRepository};
use storage::sqlite::SqliteRepository;
use trivia_core::model::{Category, CategoryId, QuestionDraft, QuestionId};

fn record(text: &str, answer: &str, category: u64, difficulty: u8) -> NewQuestionRecord {
    let draft = QuestionDraft {
        question: text.to_owned(),
        answer: answer.to_owned(),
        category: CategoryId::new(category),
        difficulty,
    };
    NewQuestionRecord::from_validated(&draft.validate().unwrap())
}

async fn seed_categories(repo: &SqliteRepository) {
    for (id, label) in [(1, "Science"), (2, "Art"), (3, "Geography")] {
        let category = Category::new(CategoryId::new(id), label).unwrap();
        repo.upsert_category(&category).await.unwrap();
    }
}

#[tokio::test]
async fn sqlite_roundtrip_persists_questions() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    seed_categories(&repo).await;

    let first = repo
        .insert_question(record("What is H2O?", "Water", 1, 1))
        .await
        .unwrap();
    let second = repo
        .insert_question(record("What is the capital of France?", "Paris", 3, 2))
        .await
        .unwrap();
    assert_eq!(first, QuestionId::new(1));
    assert_eq!(second, QuestionId::new(2));

    let questions = repo.list_questions().await.unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].id(), first);
    assert_eq!(questions[0].question(), "What is H2O?");
    assert_eq!(questions[0].answer(), "Water");
    assert_eq!(questions[0].category(), CategoryId::new(1));
    assert_eq!(questions[0].difficulty().value(), 1);

    let fetched = repo.get_category(CategoryId::new(2)).await.unwrap();
    assert_eq!(fetched.map(|c| c.label().to_owned()), Some("Art".to_owned()));
    assert!(repo.get_category(CategoryId::new(99)).await.unwrap().is_none());

    let categories = repo.list_categories().await.unwrap();
    assert_eq!(categories.len(), 3);
    assert_eq!(categories[0].label(), "Science");
}

#[tokio::test]
async fn sqlite_search_is_case_insensitive_and_verbatim() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_search?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    seed_categories(&repo).await;

    repo.insert_question(record("What is the capital of France?", "Paris", 3, 2))
        .await
        .unwrap();
    repo.insert_question(record("Who discovered penicillin?", "Alexander Fleming", 1, 3))
        .await
        .unwrap();

    let hits = repo.search_questions("CAPITAL").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].question(), "What is the capital of France?");

    // Whitespace-only terms match everything; embedded whitespace is literal.
    assert_eq!(repo.search_questions("   ").await.unwrap().len(), 2);
    assert!(repo.search_questions(" capital ").await.unwrap().is_empty());

    // LIKE wildcards carry no special meaning here.
    assert!(repo.search_questions("%").await.unwrap().is_empty());

    assert!(repo.search_questions("zebra").await.unwrap().is_empty());
}

#[tokio::test]
async fn sqlite_delete_returns_question_exactly_once() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_delete?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    seed_categories(&repo).await;

    let id = repo
        .insert_question(record("What is the largest lake in Africa?", "Lake Victoria", 3, 2))
        .await
        .unwrap();

    let deleted = repo.delete_question(id).await.unwrap().expect("first delete");
    assert_eq!(deleted.id(), id);
    assert_eq!(deleted.question(), "What is the largest lake in Africa?");

    assert!(repo.delete_question(id).await.unwrap().is_none());
    assert!(repo.list_questions().await.unwrap().is_empty());
}

#[tokio::test]
async fn sqlite_never_reuses_question_ids() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_id_reuse?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    seed_categories(&repo).await;

    repo.insert_question(record("Q1", "A1", 1, 1)).await.unwrap();
    let second = repo.insert_question(record("Q2", "A2", 1, 1)).await.unwrap();

    repo.delete_question(second).await.unwrap();

    let third = repo.insert_question(record("Q3", "A3", 1, 1)).await.unwrap();
    assert_eq!(third, QuestionId::new(3));
}

#[tokio::test]
async fn sqlite_filters_questions_by_category() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_by_category?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    seed_categories(&repo).await;

    repo.insert_question(record("Q1", "A1", 1, 1)).await.unwrap();
    repo.insert_question(record("Q2", "A2", 2, 1)).await.unwrap();
    repo.insert_question(record("Q3", "A3", 1, 1)).await.unwrap();

    let science = repo
        .list_questions_by_category(CategoryId::new(1))
        .await
        .unwrap();
    assert_eq!(science.len(), 2);
    assert!(science.iter().all(|q| q.category() == CategoryId::new(1)));
    assert!(science[0].id() < science[1].id());

    let empty = repo
        .list_questions_by_category(CategoryId::new(3))
        .await
        .unwrap();
    assert!(empty.is_empty());
}
