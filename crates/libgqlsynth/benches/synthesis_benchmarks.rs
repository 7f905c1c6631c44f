mod fixtures;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgqlsynth::annotate::annotate;
use libgqlsynth::graph::TypeGraph;
use libgqlsynth::schema::SchemaDocument;
use libgqlsynth::synth::QuerySynthesizer;
use libgqlsynth::synth::SynthesizerConfig;
use std::collections::BTreeSet;

const SIZES: [usize; 3] = [10, 100, 500];

fn schema_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_parse");
    for size in SIZES {
        let sdl = fixtures::chained_schema(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &sdl, |b, sdl| {
            b.iter(|| black_box(SchemaDocument::parse(sdl)))
        });
    }
    group.finish();
}

fn shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    for size in SIZES {
        let schema = SchemaDocument::parse(&fixtures::chained_schema(size)).unwrap();
        let graph = TypeGraph::build(&schema, &BTreeSet::new()).unwrap();
        let target = format!("Entity{}", size - 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &target, |b, target| {
            b.iter(|| black_box(graph.shortest_path("Entity0", target)))
        });
    }
    group.finish();
}

fn build_vector_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_vector_query");
    for size in SIZES {
        let schema = SchemaDocument::parse(&fixtures::chained_schema(size)).unwrap();
        let synth = QuerySynthesizer::new(&schema, SynthesizerConfig::default()).unwrap();
        let types = vec![
            "Entity0".to_string(),
            format!("Entity{}", size / 2),
            format!("Entity{}", size - 1),
        ];
        group.bench_with_input(BenchmarkId::from_parameter(size), &types, |b, types| {
            b.iter(|| black_box(synth.build_vector_query(types)))
        });
    }
    group.finish();
}

fn annotate_synthesized(c: &mut Criterion) {
    let schema = SchemaDocument::parse(&fixtures::chained_schema(100)).unwrap();
    let synth = QuerySynthesizer::new(&schema, SynthesizerConfig::default()).unwrap();
    let query = synth
        .build_vector_query(&["Entity0", "Entity10", "Entity20"])
        .unwrap();

    c.bench_function("annotate_synthesized", |b| {
        b.iter(|| black_box(annotate(&schema, query.text())))
    });
}

criterion_group!(
    benches,
    schema_parse,
    shortest_path,
    build_vector_query,
    annotate_synthesized,
);
criterion_main!(benches);
