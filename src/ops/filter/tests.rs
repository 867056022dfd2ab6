#![cfg(test)]

use super::*;
use crate::util::error::InvalidArgument;
use crate::util::fixture::CountedCalls;

#[derive(Debug, Clone, PartialEq)]
struct Car {
    name: &'static str,
    brand: &'static str,
}

fn cars() -> Vec<Car> {
    vec![
        Car { name: "Car-1", brand: "B1" },
        Car { name: "Car-2", brand: "B1" },
        Car { name: "Car-3", brand: "B2" },
    ]
}

#[test]
fn test_where() {
    let b2 = cars().where_(|car| car.brand == "B2").unwrap();
    assert_eq!(b2.len(), 1);
    assert_eq!(b2[0].name, "Car-3");

    let b1 = cars().where_(|car| car.brand == "B1").unwrap();
    assert_eq!(
        b1.select(|car| car.name),
        Ok(vec!["Car-1", "Car-2"]),
        "Matches should keep their relative order."
    );
    assert_eq!(cars().where_(|_| false), Ok(vec![]));
}

#[test]
fn test_where_indexed() {
    let numbers = [0, 30, 20, 15, 90, 85, 40, 75];
    // 0 <= 0, 20 <= 20, 15 <= 30 and 40 <= 60 hold, at indices 0, 2, 3 and 6.
    assert_eq!(
        numbers.where_indexed(|n, i| *n <= i as i32 * 10),
        Ok(vec![0, 20, 15, 40])
    );

    let mut seen = Vec::new();
    let _ = numbers.where_indexed(|_, i| {
        seen.push(i);
        true
    });
    assert_eq!(seen, (0..8).collect::<Vec<_>>(), "Every index should be passed in order.");
}

#[test]
fn test_select() {
    let cars = cars();
    assert_eq!(cars.select(|car| car.name), Ok(vec!["Car-1", "Car-2", "Car-3"]));
    assert_eq!(
        cars.select_indexed(|car, i| format!("{i}:{}", car.brand)),
        Ok(vec![String::from("0:B1"), String::from("1:B1"), String::from("2:B2")]),
        "The index should advance for every element."
    );
    assert_eq!(Vec::<Car>::new().select(|car| car.name), Ok(vec![]));
}

#[test]
fn test_all() {
    let numbers = vec![2, 4, 6];
    assert_eq!(numbers.all(|n| n % 2 == 0), Ok(true));
    assert_eq!(numbers.all(|n| *n < 5), Ok(false));
    assert_eq!(Vec::<i32>::new().all(|_| false), Ok(true), "All should be vacuously true.");

    let calls = CountedCalls::new();
    let _ = [1, 2, 3, 4].all(|n| {
        calls.tick();
        *n < 2
    });
    assert_eq!(calls.take(), 2, "All should stop at the first failure.");
}

#[test]
fn test_any() {
    let fruits = vec!["Apple", "Mango", "Lemon", "Banana"];
    assert_eq!(fruits.any(), Ok(true));
    assert_eq!(Vec::<&str>::new().any(), Ok(false));
    assert_eq!(fruits.any_by(|x| *x == "Banana"), Ok(true));
    assert_eq!(fruits.any_by(|x| *x == "Cherry"), Ok(false));
    assert_eq!(Vec::<&str>::new().any_by(|_| true), Ok(false));

    let calls = CountedCalls::new();
    let _ = fruits.any_by(|x| {
        calls.tick();
        x.starts_with('M')
    });
    assert_eq!(calls.take(), 2, "Any should stop at the first success.");
}

#[test]
fn test_count() {
    assert_eq!(cars().count(), Ok(3));
    assert_eq!(Vec::<Car>::new().count(), Ok(0));
}

#[test]
fn test_absent_source() {
    let absent: Option<Vec<i32>> = None;
    let err = InvalidArgument::new("source");
    assert_eq!(absent.where_(|_| true), Err(err));
    assert_eq!(absent.where_indexed(|_, _| true), Err(err));
    assert_eq!(absent.select(|n| *n), Err(err));
    assert_eq!(absent.select_indexed(|_, i| i), Err(err));
    assert_eq!(absent.all(|_| true), Err(err));
    assert_eq!(absent.any(), Err(err));
    assert_eq!(absent.any_by(|_| true), Err(err));
    assert_eq!(absent.count(), Err(err));
}
