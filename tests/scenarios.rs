use topo_container::{
    OrderError, PrecedenceGraph, SortArray, SortMap, SortOrderMap, SortVec, TopologicalSort,
};

const LETTER_EDGES: [(&str, &str); 6] = [
    ("F", "C"),
    ("F", "A"),
    ("E", "A"),
    ("E", "B"),
    ("C", "D"),
    ("D", "B"),
];

fn declare<S: TopologicalSort<Key = &'static str>>(s: &mut S) {
    for (v, w) in LETTER_EDGES {
        s.precede(v, w);
    }
}

fn letter_vec() -> SortVec<&'static str> {
    let mut v = SortVec::new();
    declare(&mut v);
    for (key, n) in [("A", 3), ("B", 2), ("C", 2), ("D", 2), ("E", 2), ("F", 3)] {
        for _ in 0..n {
            v.push(key);
        }
    }
    v
}

#[test]
fn bare_graph_linearization() {
    let mut g = PrecedenceGraph::new();
    for (v, w) in LETTER_EDGES {
        g.precede(v, w);
    }
    let mut s = g.topological_sort();
    let mut popped = Vec::new();
    while let Some(k) = s.pop() {
        popped.push(k);
    }
    assert_eq!(popped, vec!["F", "E", "A", "C", "D", "B"]);
}

#[test]
fn ordered_map_with_unconstrained_keys() {
    let mut m: SortMap<&str, i32> = SortMap::new();
    declare(&mut m);
    for (i, k) in ["A", "B", "C", "D", "E", "F"].into_iter().enumerate() {
        m.insert(k, i as i32);
    }
    m.insert("X", 100);
    m.insert("Y", 101);
    m.insert("Z", 102);

    let v = m.sort();
    assert_eq!(
        v,
        vec![
            ("F", 5),
            ("E", 4),
            ("A", 0),
            ("C", 2),
            ("D", 3),
            ("B", 1),
            ("X", 100),
            ("Y", 101),
            ("Z", 102)
        ]
    );
    assert_eq!(v.len(), m.len());
}

#[test]
fn insertion_ordered_map_with_extra_edge() {
    let mut m: SortOrderMap<&str, i32> = SortOrderMap::new();
    declare(&mut m);
    for (i, k) in ["A", "B", "C", "D", "E", "F"].into_iter().enumerate() {
        m.insert(k, i as i32);
    }
    m.insert("X", 100);
    m.insert("Y", 101);
    m.insert("Z", 102);
    m.precede("Z", "F");

    assert_eq!(
        m.sort(),
        vec![
            ("Z", 102),
            ("F", 5),
            ("E", 4),
            ("A", 0),
            ("C", 2),
            ("D", 3),
            ("B", 1),
            ("X", 100),
            ("Y", 101)
        ]
    );
}

#[test]
fn vector_drops_graph_keys_it_does_not_hold() {
    let mut v = letter_vec();
    v.precede("Z", "F");

    let sorted = v.sort();
    assert_eq!(
        sorted,
        vec!["F", "F", "F", "E", "E", "A", "A", "A", "C", "C", "D", "D", "B", "B"]
    );
    assert_eq!(sorted.len(), v.len());
}

#[test]
fn vector_picks_up_key_added_later() {
    let mut v = letter_vec();
    v.precede("Z", "F");
    let before = v.sort();

    v.push("Z");
    let after = v.sort();
    assert_eq!(after.len(), 15);
    assert_eq!(after[0], "Z");
    assert_eq!(
        after,
        vec!["Z", "F", "F", "F", "E", "E", "A", "A", "A", "C", "C", "D", "D", "B", "B"]
    );
    assert_eq!(&after[1..], &before[..]);
}

#[test]
fn vector_of_integers_interleaves_pairs() {
    let mut v: SortVec<u32> = (0..10).collect();
    v.precede(9, 0);
    v.precede(8, 1);
    v.precede(7, 2);
    v.precede(6, 3);
    v.precede(5, 4);
    assert_eq!(v.sort(), vec![9, 0, 8, 1, 7, 2, 6, 3, 5, 4]);
}

#[test]
fn array_of_letters() {
    let mut a = SortArray::new(["A", "B", "C", "D", "E", "F", "X", "Y", "Z"]);
    declare(&mut a);
    assert_eq!(a.sort(), ["F", "E", "A", "C", "D", "B", "X", "Y", "Z"]);
}

#[test]
fn repeated_sorts_are_identical() {
    let v = letter_vec();
    let first = v.sort();
    assert_eq!(first, v.sort());
    assert_eq!(v.graph().topological_sort(), v.graph().topological_sort());
}

#[test]
fn checked_sort_through_trait() {
    let mut v = letter_vec();
    assert!(v.checked_sort().is_ok());
    v.precede("B", "F");
    match v.checked_sort() {
        Err(OrderError::Cycle { key }) => assert!(["B", "C", "D", "F"].contains(&key)),
        other => panic!("expected a cycle, got {other:?}"),
    }
    // The unchecked path still terminates and keeps every element.
    assert_eq!(v.sort().len(), 14);
}

#[test]
fn graph_shared_between_adapters() {
    let graph: PrecedenceGraph<&str> = LETTER_EDGES.into_iter().collect();
    let v = SortVec::with_graph(vec!["B", "A", "F"], graph.clone());
    let a = SortArray::with_graph(["B", "A", "F"], graph);
    assert_eq!(v.sort(), vec!["F", "A", "B"]);
    assert_eq!(a.sort(), ["F", "A", "B"]);
}
