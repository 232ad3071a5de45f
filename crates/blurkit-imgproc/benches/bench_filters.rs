use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use blurkit_image::{Image, Pixel};
use blurkit_imgproc::filter::gaussian_blur_with_strategy;
use blurkit_imgproc::parallel::ExecutionStrategy;

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Gaussian Blur");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        for kernel_size in [3, 5, 9, 17].iter() {
            group.throughput(criterion::Throughput::Elements(
                (*width * *height * *kernel_size) as u64,
            ));

            let parameter_string = format!("{}x{}x{}", width, height, kernel_size);

            let image_size = [*width, *height].into();
            let image = Image::from_size_val(image_size, Pixel::new(64, 128, 192)).unwrap();

            group.bench_with_input(
                BenchmarkId::new("gaussian_blur_serial", &parameter_string),
                &image,
                |b, i| {
                    b.iter(|| {
                        black_box(gaussian_blur_with_strategy(
                            i,
                            *kernel_size,
                            1.5,
                            ExecutionStrategy::Serial,
                        ))
                    })
                },
            );

            group.bench_with_input(
                BenchmarkId::new("gaussian_blur_parallel", &parameter_string),
                &image,
                |b, i| {
                    b.iter(|| {
                        black_box(gaussian_blur_with_strategy(
                            i,
                            *kernel_size,
                            1.5,
                            ExecutionStrategy::Parallel,
                        ))
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
