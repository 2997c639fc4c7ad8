use criterion::{black_box, criterion_group, criterion_main, Criterion};
use featvis::objectives::{direction_neuron, dot_cossim, extract_act_pos, handle_batch, TensorAccess};
use featvis::Result;
use ndarray::{Array1, Array4, ArrayD};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

fn bench_dot_cossim(c: &mut Criterion) {
    let x = Array1::random(528, Uniform::new(-1.0f32, 1.0));
    let y = Array1::random(528, Uniform::new(-1.0f32, 1.0));

    c.bench_function("dot_cossim pow=0", |b| {
        b.iter(|| dot_cossim(black_box(x.view()), black_box(y.view()), 0.0))
    });
    c.bench_function("dot_cossim pow=1", |b| {
        b.iter(|| dot_cossim(black_box(x.view()), black_box(y.view()), 1.0))
    });
}

fn bench_slicing(c: &mut Criterion) {
    let acts = Array4::random((8, 528, 14, 14), Uniform::new(0.0f32, 1.0));
    let dynamic = acts.clone().into_dyn();
    let model = move |_: &str| -> Result<ArrayD<f32>> { Ok(dynamic.clone()) };

    c.bench_function("extract_act_pos", |b| {
        b.iter(|| extract_act_pos(black_box(acts.view()), None, None))
    });

    let access = handle_batch(&model, Some(3));
    c.bench_function("handle_batch fetch", |b| b.iter(|| access.fetch(black_box("mixed4d"))));

    let objective = direction_neuron(
        "mixed4d",
        Array1::random(528, Uniform::new(-1.0f32, 1.0)),
        Some(3),
        None,
        None,
        1.0,
    );
    c.bench_function("direction_neuron evaluate", |b| b.iter(|| objective.evaluate(&model)));
}

criterion_group!(benches, bench_dot_cossim, bench_slicing);
criterion_main!(benches);
