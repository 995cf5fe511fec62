use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use omnibus_core::prelude::*;

const GRID: usize = 20;

fn stop_name(row: usize, col: usize) -> String {
    format!("S{row}-{col}")
}

/// Square grid of stops with one linear bus per row and per column
fn grid_catalogue() -> TransitCatalogue {
    let mut catalogue = TransitCatalogue::new();
    for row in 0..GRID {
        for col in 0..GRID {
            let lat = 55.7 + row as f64 * 0.005;
            let lng = 37.6 + col as f64 * 0.008;
            catalogue
                .add_stop(&stop_name(row, col), lat, lng)
                .expect("unique stop");
        }
    }
    for row in 0..GRID {
        for col in 0..GRID {
            if col + 1 < GRID {
                catalogue
                    .set_distance(&stop_name(row, col), &stop_name(row, col + 1), 520.0)
                    .expect("known stops");
            }
            if row + 1 < GRID {
                catalogue
                    .set_distance(&stop_name(row, col), &stop_name(row + 1, col), 610.0)
                    .expect("known stops");
            }
        }
    }
    for line in 0..GRID {
        let row: Vec<_> = (0..GRID).map(|col| stop_name(line, col)).collect();
        let col: Vec<_> = (0..GRID).map(|row| stop_name(row, line)).collect();
        catalogue
            .add_bus(&format!("R{line}"), &row, false)
            .expect("valid bus");
        catalogue
            .add_bus(&format!("C{line}"), &col, false)
            .expect("valid bus");
    }
    catalogue
}

fn bench_router(c: &mut Criterion) {
    let catalogue = grid_catalogue();
    let settings = RoutingSettings::from_kmh(6, 40.0).expect("valid settings");

    c.bench_function("router_build", |b| {
        b.iter(|| TransitRouter::new(black_box(&catalogue), settings).expect("router"));
    });

    let router = TransitRouter::new(&catalogue, settings).expect("router");
    let from = stop_name(0, 0);
    let to = stop_name(GRID - 1, GRID - 1);
    c.bench_function("find_fastest_route_corner_to_corner", |b| {
        b.iter(|| router.find_fastest_route(black_box(&from), black_box(&to)));
    });
    c.bench_function("travel_times_from_corner", |b| {
        b.iter(|| router.travel_times_from(black_box(&from), None));
    });
}

criterion_group!(benches, bench_router);
criterion_main!(benches);
