//! Runs the operators over a few fixed sequences and prints each result on its own line, with
//! sequences joined by `", "`.

use std::fmt::Display;

use sequence_ops::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Car {
    name: String,
    brand: String,
}

impl Car {
    fn new(name: &str, brand: &str) -> Car {
        Car {
            name: name.to_owned(),
            brand: brand.to_owned(),
        }
    }
}

#[derive(Debug, Default)]
struct Report {
    lines: Vec<String>,
}

impl Report {
    fn add(&mut self, result: impl Display) {
        self.lines.push(result.to_string());
    }

    fn add_joined<T: Display>(&mut self, items: &[T]) {
        let joined = items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        self.lines.push(joined);
    }
}

fn run() -> Result<Report, SequenceError> {
    let numbers = [0, 30, 20, 15, 90, 85, 40, 75];
    let fruits = ["Apple", "Mango", "Lemon", "Banana"].map(String::from);
    let cars = [
        Car::new("Car-1", "B1"),
        Car::new("Car-2", "B1"),
        Car::new("Car-3", "B2"),
    ];
    let countries = ["India", "USA", "UK", "Canada", "Srilanka"];
    let others = ["India", "uk", "Canada", "France", "Japan"];

    let mut report = Report::default();

    report.add(fruits.element_at_or_default(10)?);
    report.add(fruits.any()?);
    report.add(fruits.any_by(|x| x == "Banana")?);
    report.add(fruits.count()?);

    let extra = ["Grapes", "Avocado"].map(String::from);
    report.add_joined(&fruits.concat(&extra)?);

    report.add(cars.where_(|car| car.brand == "B2")?.count()?);
    report.add_joined(&numbers.where_indexed(|n, i| *n <= i as i32 * 10)?);

    let names = cars
        .append(Car::new("Car-4", "B3"))?
        .select(|car| car.name.clone())?;
    report.add_joined(&names);

    report.add_joined(&countries.intersect(&others)?);
    report.add_joined(&countries.union(&others)?);

    Ok(report)
}

fn main() {
    for line in run().throw().lines {
        println!("{line}");
    }
}
