use fastrand::Rng;
use trava::{
    algo::{StronglyConnectedComponents, TopoSort},
    storage::AdjList,
    visit::Dfs,
};

const RANDOM_SEED: u64 = 0xdec1a551f1ab1e;

fn main() {
    divan::main();
}

fn random_directed(n: usize, density: f32, rng: &mut Rng) -> AdjList {
    let mut graph = AdjList::new();

    for _ in 0..n {
        graph.add_vertex();
    }

    let mut edges = Vec::new();

    for from in 0..n {
        for to in 0..n {
            if from != to && rng.f32() < density {
                edges.push((from, to));
            }
        }
    }

    graph.extend_with_edges(edges);
    graph
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn dfs_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| {
        let mut dfs = Dfs::new(&graph);
        dfs.run(&graph);
        dfs.component_count()
    });
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn toposort_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| TopoSort::on(&graph).run().map(|sorted| sorted.into_vec()));
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn scc_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| StronglyConnectedComponents::on(&graph).run().len());
}
