//! Code generation benchmarks.
//!
//! Programs are built directly as annotated trees, so only generation is
//! measured:
//! - Size-based: straight-line programs from 10 to 5000 statements
//! - Shape-specific: deep expressions, nested branches, loops, print-heavy
//!
//! ## Profiling with Puffin
//!
//! ```bash
//! cargo bench --features profile-with-puffin -- --profile-time 5
//! ```

use bumpalo::Bump;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pcl::ast::{AstBuilder, BinaryOp, Expr, Program, Stmt};
use pcl::{CodeGenerator, CodegenOptions, TypeTag};
use std::hint::black_box;

#[cfg(feature = "profile-with-puffin")]
static FRAME_VIEW: std::sync::OnceLock<puffin::GlobalFrameView> = std::sync::OnceLock::new();

#[cfg(feature = "profile-with-puffin")]
fn setup_profiler() {
    puffin::set_scopes_on(true);
    FRAME_VIEW.get_or_init(puffin::GlobalFrameView::default);
}

#[cfg(not(feature = "profile-with-puffin"))]
fn setup_profiler() {}

#[cfg(feature = "profile-with-puffin")]
fn end_profiling_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(not(feature = "profile-with-puffin"))]
fn end_profiling_frame() {}

/// Print the average time of each top-level scope.
#[cfg(feature = "profile-with-puffin")]
fn print_profiling_stats() {
    use puffin::Reader;
    use std::collections::BTreeMap;

    let Some(frame_view) = FRAME_VIEW.get() else {
        return;
    };
    let view = frame_view.lock();
    let scopes = view.scope_collection();

    let mut totals: BTreeMap<String, i64> = BTreeMap::new();
    let mut frames = 0i64;
    for frame in view.recent_frames() {
        let Ok(unpacked) = frame.unpacked() else {
            continue;
        };
        frames += 1;
        for stream_info in unpacked.thread_streams.values() {
            let Ok(top) = Reader::from_start(&stream_info.stream).read_top_scopes() else {
                continue;
            };
            for scope in top {
                if let Some(details) = scopes.fetch_by_id(&scope.id) {
                    *totals.entry(details.name().to_string()).or_default() +=
                        scope.record.duration_ns;
                }
            }
        }
    }

    println!("\n=== Generation scopes ({frames} frames) ===");
    for (name, ns) in totals {
        let avg = ns / frames.max(1);
        println!(
            "  {name:30} {:>10.2?}",
            std::time::Duration::from_nanos(avg as u64)
        );
    }
}

#[cfg(not(feature = "profile-with-puffin"))]
fn print_profiling_stats() {}

// =============================================================================
// Program shapes
// =============================================================================

const VARS: [&str; 4] = ["a", "b", "c", "d"];

fn int_var<'ast>(b: &AstBuilder<'ast>, i: usize) -> Expr<'ast> {
    b.var(VARS[i % VARS.len()], TypeTag::Integer)
}

fn declare_all<'ast>(b: &AstBuilder<'ast>) -> Vec<pcl::ast::VarDecl<'ast>> {
    VARS.iter()
        .map(|name| b.decl(name, TypeTag::Integer))
        .collect()
}

/// `n` assignments of the form `a := b * 3 + c`.
fn straight_line<'ast>(b: &AstBuilder<'ast>, n: usize) -> Program<'ast> {
    let stmts = (0..n).map(|i| {
        let product = b.binary(
            int_var(b, i + 1),
            BinaryOp::Mul,
            b.int("3"),
            TypeTag::Integer,
        );
        let sum = b.binary(product, BinaryOp::Add, int_var(b, i + 2), TypeTag::Integer);
        b.at(i as u32 + 1, 1)
            .assign(VARS[i % VARS.len()], TypeTag::Integer, sum)
    });
    b.program("Straight", declare_all(b), stmts.collect::<Vec<_>>())
}

/// One assignment whose value is a left-leaning sum of `depth` terms.
fn deep_expression<'ast>(b: &AstBuilder<'ast>, depth: usize) -> Program<'ast> {
    let value = (1..depth).fold(b.int("0"), |acc, i| {
        b.binary(acc, BinaryOp::Sub, int_var(b, i), TypeTag::Integer)
    });
    b.program(
        "Deep",
        declare_all(b),
        [b.assign("a", TypeTag::Integer, value)],
    )
}

/// `if` statements nested `depth` levels, each with an `else`.
fn nested_branches<'ast>(b: &AstBuilder<'ast>, depth: usize) -> Program<'ast> {
    let leaf = b.assign("a", TypeTag::Integer, b.int("1"));
    let nest = (0..depth).fold(leaf, |inner: Stmt<'ast>, i| {
        let cond = b.binary(
            int_var(b, i),
            BinaryOp::Greater,
            b.int("0"),
            TypeTag::Unknown,
        );
        let other = b.assign("b", TypeTag::Integer, b.int("2"));
        b.if_then_else(cond, [inner], [other])
    });
    b.program("Nested", declare_all(b), [nest])
}

/// `n` counting loops in sequence.
fn loops<'ast>(b: &AstBuilder<'ast>, n: usize) -> Program<'ast> {
    let stmts = (0..n).map(|_| {
        let step = b.binary(int_var(b, 0), BinaryOp::Add, b.int("1"), TypeTag::Integer);
        let cond = b.binary(
            int_var(b, 0),
            BinaryOp::Less,
            b.int("100"),
            TypeTag::Unknown,
        );
        b.repeat([b.assign("a", TypeTag::Integer, step)], cond)
    });
    b.program("Loops", declare_all(b), stmts.collect::<Vec<_>>())
}

/// `n` prints of every variable.
fn prints<'ast>(b: &AstBuilder<'ast>, n: usize) -> Program<'ast> {
    let stmts = (0..n).map(|_| {
        let args = (0..VARS.len()).map(|i| int_var(b, i));
        b.print("'%d %d %d %d\\n'", args)
    });
    b.program("Prints", declare_all(b), stmts.collect::<Vec<_>>())
}

// =============================================================================
// Benchmarks
// =============================================================================

/// Generation time across program sizes.
fn size_based_benchmarks(c: &mut Criterion) {
    setup_profiler();

    let generator = CodeGenerator::new(CodegenOptions::default());
    let mut group = c.benchmark_group("codegen/sizes");

    for size in [10usize, 100, 1000, 5000] {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let program = straight_line(&b, size);

        group.throughput(Throughput::Elements(size as u64));
        let id = BenchmarkId::new("statements", size);
        group.bench_with_input(id, &program, |bench, program| {
            bench.iter(|| {
                let generated = generator.generate(black_box(program)).unwrap();
                end_profiling_frame();
                black_box(generated.text.len())
            });
        });
    }

    group.finish();
    print_profiling_stats();
}

/// Generation time for specific program shapes.
fn shape_benchmarks(c: &mut Criterion) {
    let generator = CodeGenerator::new(CodegenOptions::default().without_annotations());
    let mut group = c.benchmark_group("codegen/shapes");

    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let shapes = [
        ("deep_expression_500", deep_expression(&b, 500)),
        ("nested_branches_200", nested_branches(&b, 200)),
        ("loops_500", loops(&b, 500)),
        ("prints_500", prints(&b, 500)),
    ];

    for (name, program) in &shapes {
        group.bench_function(*name, |bench| {
            bench.iter(|| {
                let generated = generator.generate(black_box(program)).unwrap();
                black_box(generated.listing.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, size_based_benchmarks, shape_benchmarks);
criterion_main!(benches);
