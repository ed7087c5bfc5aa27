use criterion::{black_box, criterion_group, criterion_main, Criterion};
use entity_bag::{entity_base, Entity, EntityBag};

trait Body: Entity {
    fn step(&mut self, dt: f32);
    fn energy(&self) -> f32;
}
entity_base!(Body);

#[derive(Clone)]
struct Particle {
    pos: [f32; 3],
    vel: [f32; 3],
}

impl Body for Particle {
    fn step(&mut self, dt: f32) {
        for axis in 0..3 {
            self.pos[axis] += self.vel[axis] * dt;
        }
    }

    fn energy(&self) -> f32 {
        self.vel.iter().map(|v| v * v).sum::<f32>() * 0.5
    }
}

#[derive(Clone)]
struct Spinner {
    angle: f32,
    rate: f32,
}

impl Body for Spinner {
    fn step(&mut self, dt: f32) {
        self.angle += self.rate * dt;
    }

    fn energy(&self) -> f32 {
        self.rate * self.rate
    }
}

const ENTITIES: usize = 10_000;

fn particle(n: usize) -> Particle {
    let v = n as f32;
    Particle {
        pos: [0.0; 3],
        vel: [v, v * 0.5, 1.0],
    }
}

fn spinner(n: usize) -> Spinner {
    Spinner {
        angle: 0.0,
        rate: n as f32,
    }
}

fn bench_iteration(c: &mut Criterion) {
    let mut bag: EntityBag<dyn Body> = EntityBag::with_bag_capacity(ENTITIES);
    let mut boxed: Vec<Box<dyn Body>> = Vec::with_capacity(ENTITIES);
    for n in 0..ENTITIES {
        if n % 2 == 0 {
            bag.emplace(particle(n));
            boxed.push(Box::new(particle(n)));
        } else {
            bag.emplace(spinner(n));
            boxed.push(Box::new(spinner(n)));
        }
    }

    let mut group = c.benchmark_group("energy");
    group.bench_function("entity_bag", |b| {
        b.iter(|| black_box(bag.iter().map(|e| e.energy()).sum::<f32>()))
    });
    group.bench_function("vec_box_dyn", |b| {
        b.iter(|| black_box(boxed.iter().map(|e| e.energy()).sum::<f32>()))
    });
    group.finish();

    let mut group = c.benchmark_group("step");
    group.bench_function("entity_bag", |b| {
        b.iter(|| bag.for_each_mut(|e| e.step(black_box(0.016))))
    });
    group.bench_function("vec_box_dyn", |b| {
        b.iter(|| boxed.iter_mut().for_each(|e| e.step(black_box(0.016))))
    });
    group.finish();
}

criterion_group!(benches, bench_iteration);
criterion_main!(benches);
