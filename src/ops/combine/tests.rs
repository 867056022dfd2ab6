#![cfg(test)]

use std::collections::VecDeque;

use super::*;
use crate::comparer::{DefaultEquality, IgnoreAsciiCase};
use crate::util::error::InvalidArgument;
use crate::util::fixture::Keyed;

fn countries() -> (Vec<&'static str>, Vec<&'static str>) {
    (
        vec!["India", "USA", "UK", "Canada", "Srilanka"],
        vec!["India", "uk", "Canada", "France", "Japan"],
    )
}

#[test]
fn test_concat() {
    let fruits = vec!["Apple", "Mango", "Lemon", "Banana"];
    let more = VecDeque::from(["Grapes", "Avocado"]);
    assert_eq!(
        fruits.concat(&more),
        Ok(vec!["Apple", "Mango", "Lemon", "Banana", "Grapes", "Avocado"])
    );
    assert_eq!(
        fruits.concat(&fruits).map(|all| all.len()),
        Ok(8),
        "Concatenation shouldn't remove duplicates."
    );
    assert_eq!(Vec::<&str>::new().concat(&more), Ok(vec!["Grapes", "Avocado"]));
}

#[test]
fn test_concat_absent() {
    let present = vec![1, 2];
    let absent: Option<Vec<i32>> = None;
    assert_eq!(absent.concat(&present), Err(InvalidArgument::new("first")));
    assert_eq!(present.concat(&absent), Err(InvalidArgument::new("second")));
    assert_eq!(
        absent.concat(&absent),
        Err(InvalidArgument::new("first")),
        "The first absent argument should be reported."
    );
}

#[test]
fn test_intersect() {
    let (first, second) = countries();
    assert_eq!(
        first.intersect(&second),
        Ok(vec!["India", "Canada"]),
        "Default equality should be case sensitive."
    );
    assert_eq!(
        first.intersect_by(&second, &IgnoreAsciiCase),
        Ok(vec!["India", "UK", "Canada"])
    );
    assert_eq!(
        first.intersect_by(&second, &|a: &&str, b: &&str| a.len() == b.len()),
        Ok(vec!["India", "UK", "Canada"]),
        "A closure should be usable as a comparer."
    );
    assert_eq!(first.intersect(&Vec::new()), Ok(vec![]));
}

#[test]
fn test_intersect_duplicates() {
    let first = vec![1, 2, 1, 3, 1];
    let second = vec![1, 1, 1, 3];
    assert_eq!(
        first.intersect(&second),
        Ok(vec![1, 1, 3, 1]),
        "Duplicates in the first sequence should be kept once per occurrence."
    );

    let first = [Keyed::new(1, "first-a"), Keyed::new(2, "first-b")];
    let second = [Keyed::new(2, "second-b"), Keyed::new(1, "second-a")];
    let labels = first
        .intersect(&second)
        .map(|items| items.into_iter().map(|item| item.label).collect::<Vec<_>>());
    assert_eq!(
        labels,
        Ok(vec!["first-a", "first-b"]),
        "Results should come from the first sequence, in its order."
    );
}

#[test]
fn test_intersect_absent() {
    let present = vec![1];
    let absent: Option<Vec<i32>> = None;
    assert_eq!(absent.intersect(&present), Err(InvalidArgument::new("first")));
    assert_eq!(present.intersect(&absent), Err(InvalidArgument::new("second")));
    assert_eq!(
        absent.intersect_by(&present, &DefaultEquality),
        Err(InvalidArgument::new("first"))
    );
    assert_eq!(
        present.intersect_by(&absent, &|a: &i32, b: &i32| a == b),
        Err(InvalidArgument::new("second"))
    );
}

#[test]
fn test_append() {
    let cars = vec!["Car-1", "Car-2", "Car-3"];
    let appended = cars.append("Car-4");
    assert_eq!(appended, Ok(vec!["Car-1", "Car-2", "Car-3", "Car-4"]));
    assert_eq!(cars.len(), 3, "The source should be unchanged.");
    assert_eq!(Vec::<u8>::new().append(7), Ok(vec![7]));

    let absent: Option<Vec<u8>> = None;
    assert_eq!(absent.append(7), Err(InvalidArgument::new("source")));
}

#[test]
fn test_union() {
    let (first, second) = countries();
    assert_eq!(
        first.union(&second),
        Ok(vec!["India", "USA", "UK", "Canada", "Srilanka", "uk", "France", "Japan"])
    );
    assert_eq!(
        first.union_by(&second, &IgnoreAsciiCase),
        Ok(vec!["India", "USA", "UK", "Canada", "Srilanka", "France", "Japan"]),
        "The first of two equal elements should be kept."
    );
    assert_eq!(vec![1, 1, 2].union(&Vec::new()), Ok(vec![1, 2]));

    let absent: Option<Vec<&str>> = None;
    assert_eq!(first.union(&absent), Err(InvalidArgument::new("second")));
}

#[test]
fn test_union_absent() {
    let present = vec!["UK"];
    let absent: Option<Vec<&str>> = None;
    assert_eq!(absent.union(&present), Err(InvalidArgument::new("first")));
    assert_eq!(
        absent.union_by(&present, &IgnoreAsciiCase),
        Err(InvalidArgument::new("first"))
    );
    assert_eq!(
        present.union_by(&absent, &IgnoreAsciiCase),
        Err(InvalidArgument::new("second"))
    );
    assert_eq!(
        absent.union(&absent),
        Err(InvalidArgument::new("first")),
        "The first absent argument should be reported."
    );
}
