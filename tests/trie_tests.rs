use letterbox_solver::Trie;

fn get_test_words() -> Vec<&'static str> {
    vec![
        "dismissed",
        "anterior",
        "region",
        "nomadic",
        "dysmetria",
        "corned",
    ]
}

#[test]
fn test_construct_trie() {
    let trie = Trie::from_words(get_test_words());
    let root = trie.root();

    assert!(trie.child(root, 'c').is_some());
    assert!(trie.child(root, 'd').is_some());
    assert!(trie.child(root, 'x').is_none());
    assert_eq!(trie.word_count(), 6);
}

#[test]
fn test_search_word() {
    let trie = Trie::from_words(get_test_words());

    assert!(trie.contains("region"));
    assert!(trie.contains("corned"));
    assert!(!trie.contains("cap"));
    assert!(!trie.contains("ca"));
}

#[test]
fn test_every_inserted_word_is_found() {
    let words = get_test_words();
    let trie = Trie::from_words(&words);
    for word in &words {
        assert!(trie.contains(word), "Missing word: {}", word);
    }

    let mut reversed = words.clone();
    reversed.reverse();
    let trie = Trie::from_words(&reversed);
    for word in &words {
        assert!(trie.contains(word), "Missing word after reordering: {}", word);
    }
}

#[test]
fn test_prefix_words() {
    let trie = Trie::from_words(["ab", "abc", "abcd"]);

    assert!(trie.contains("abcd"));
    assert!(trie.contains("abc"));
    assert!(trie.contains("ab"));
    assert!(!trie.contains("abx"));
    assert!(!trie.contains("a"));
    assert!(!trie.contains("abcde"));
}

#[test]
fn test_prefix_is_not_a_word() {
    let trie = Trie::from_words(get_test_words());

    assert!(trie.contains_prefix("reg"));
    assert!(!trie.contains("reg"));
    assert!(!trie.contains_prefix("rex"));
    assert!(!trie.contains("regions"));
}

#[test]
fn test_empty_trie() {
    let trie = Trie::new();
    let root = trie.root();

    assert!(!trie.has_children(root));
    assert!(!trie.is_end_of_word(root));
    assert!(trie.is_empty());
    assert!(!trie.contains(""));
    assert!(!trie.contains("region"));
}

#[test]
fn test_empty_word_marks_root() {
    let mut trie = Trie::new();
    trie.insert("");

    assert!(trie.is_end_of_word(trie.root()));
    assert!(trie.contains(""));
    assert_eq!(trie.node_count(), 1);
    assert_eq!(trie.word_count(), 1);
}

#[test]
fn test_shared_prefixes_reuse_nodes() {
    let trie = Trie::from_words(["ab", "abc", "abcd"]);
    // root + a + b + c + d
    assert_eq!(trie.node_count(), 5);

    let mut trie = Trie::new();
    trie.insert("region");
    trie.insert("regions");
    assert_eq!(trie.node_count(), 8);
}

#[test]
fn test_reinsert_is_idempotent() {
    let mut trie = Trie::new();
    trie.insert("corned");
    let nodes = trie.node_count();
    trie.insert("corned");

    assert_eq!(trie.node_count(), nodes);
    assert_eq!(trie.word_count(), 1);
}

#[test]
fn test_insert_then_search() {
    let mut trie = Trie::from_words(get_test_words());
    assert!(!trie.contains("nomad"));

    trie.insert("nomad");
    assert!(trie.contains("nomad"));
    assert!(trie.contains("nomadic"));
}

#[test]
fn test_collect_into_trie() {
    let trie: Trie = vec!["siren".to_string(), "diner".to_string()]
        .into_iter()
        .collect();

    assert!(trie.contains("siren"));
    assert!(trie.contains("diner"));
    assert_eq!(trie.word_count(), 2);
}

#[test]
fn test_walk_by_node() {
    let trie = Trie::from_words(["ab", "abc"]);
    let a = trie.child(trie.root(), 'a').unwrap();
    let b = trie.child(a, 'b').unwrap();
    let c = trie.child(b, 'c').unwrap();

    assert!(!trie.is_end_of_word(a));
    assert!(trie.is_end_of_word(b));
    assert!(trie.has_children(b));
    assert!(trie.is_end_of_word(c));
    assert!(!trie.has_children(c));
}

#[test]
fn test_foreign_handle_does_not_panic() {
    let large = Trie::from_words(["region", "regions"]);
    let small = Trie::from_words(["ab"]);

    let mut node = large.root();
    for c in "regions".chars() {
        node = large.child(node, c).unwrap();
    }

    assert!(small.child(node, 'a').is_none());
    assert!(!small.is_end_of_word(node));
    assert!(!small.has_children(node));
}
