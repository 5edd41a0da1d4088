
use manhattan_distance_field::prelude::*;
use criterion::{ Criterion, criterion_group, criterion_main };

fn bitmap_from_function<I>(width: usize, height: usize, marked: I) -> Bitmap
    where I: Fn(usize, usize) -> bool
{
    let mut values = vec![0_u8; width * height];

    for column in 1..=width {
        for row in 1..=height {
            if marked(column, row) {
                values[height * (column - 1) + (row - 1)] = 1;
            }
        }
    }

    Bitmap::from_values(width, height, &values).unwrap()
}

fn diamond(center_column: usize, center_row: usize, radius: usize)
    -> impl (Fn(usize, usize) -> bool)
{
    move |column, row| {
        let columns = (column as i64 - center_column as i64).abs();
        let rows = (row as i64 - center_row as i64).abs();
        columns + rows < radius as i64
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("sweep_dot", |bencher| {
        let width = 1080;
        let height = 1920;

        let bitmap = bitmap_from_function(
            width, height, diamond(width / 2, height / 2, 6)
        );

        bencher.iter(|| {
            let grid: DistanceGrid<U32DistanceStorage> =
                compute_distance_grid(&bitmap).unwrap();
            grid
        })
    });

    c.bench_function("generate_and_sweep", |bencher| {
        let width = 512;
        let height = 512;

        bencher.iter(|| {
            let bitmap = create_bitmaps(1, width, height, ValueSource::Random)
                .unwrap()
                .remove(0);

            compute_u16_distance_grid(&bitmap).unwrap()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
