use super::*;

fn sample_pool() -> Pool {
    Pool::new(
        "Data Scientist",
        "Technical",
        vec![
            ("What is Python?", "A programming language."),
            ("Explain overfitting", "Model fits noise instead of signal."),
            ("Why does regularization help?", "It penalizes large weights."),
        ],
    )
}

#[test]
fn test_indices_are_positional() {
    let pool = sample_pool();
    for (i, q) in pool.questions().iter().enumerate() {
        assert_eq!(q.index, i);
    }
}

#[test]
fn test_difficulty_computed_at_build() {
    let pool = sample_pool();
    assert_eq!(pool.get(0).unwrap().difficulty, Difficulty::Easy);
    assert_eq!(pool.get(1).unwrap().difficulty, Difficulty::Medium);
    assert_eq!(pool.get(2).unwrap().difficulty, Difficulty::Hard);
}

#[test]
fn test_role_and_type_tags() {
    let pool = sample_pool();
    assert_eq!(pool.role(), "Data Scientist");
    assert_eq!(pool.question_type(), "Technical");
}

#[test]
fn test_tier_members() {
    let pool = Pool::new(
        "r",
        "t",
        vec![
            ("What is SQL?", "a"),
            ("Why use an index?", "b"),
            ("What is Git?", "c"),
        ],
    );
    assert_eq!(pool.tier_members(Difficulty::Easy), vec![0, 2]);
    assert_eq!(pool.tier_members(Difficulty::Hard), vec![1]);
    assert!(pool.tier_members(Difficulty::Medium).is_empty());
}

#[test]
fn test_empty_pool() {
    let pool = Pool::new("r", "t", Vec::<(&str, &str)>::new());
    assert!(pool.is_empty());
    assert_eq!(pool.len(), 0);
    assert!(pool.get(0).is_none());
}

#[test]
fn test_texts_in_index_order() {
    let pool = sample_pool();
    let texts: Vec<&str> = pool.texts().collect();
    assert_eq!(texts[0], "What is Python?");
    assert_eq!(texts[2], "Why does regularization help?");
}

#[test]
fn test_get_out_of_bounds() {
    let pool = sample_pool();
    assert!(pool.get(99).is_none());
}
