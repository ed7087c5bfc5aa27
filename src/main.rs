// main.rs file for running the entity bag directly

use entity_bag::{entity_base, Entity, EntityBag};

trait Foo: Entity {
    fn update(&self);
}
entity_base!(Foo);

#[derive(Clone)]
struct Bar {
    i: i32,
    f: f32,
}

impl Foo for Bar {
    fn update(&self) {
        println!("Bar::update(): i = {}, f = {}", self.i, self.f);
    }
}

#[derive(Clone)]
struct Baz {
    f: f32,
}

impl Foo for Baz {
    fn update(&self) {
        println!("Baz::update(): f = {}", self.f);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut entity_bag: EntityBag<dyn Foo> = EntityBag::new();
    entity_bag.emplace(Bar { i: 1, f: 2.0 });
    entity_bag.emplace(Baz { f: 1.0 });
    entity_bag.emplace(Bar { i: 2, f: 4.0 });
    entity_bag.emplace(Bar { i: 3, f: 5.0 });
    entity_bag.emplace(Baz { f: 2.0 });
    entity_bag.emplace(Bar { i: 4, f: 6.0 });
    entity_bag.emplace(Baz { f: 3.0 });

    let a_foo: Box<dyn Foo> = Box::new(Baz { f: 4.0 });
    entity_bag.emplace_erased(&*a_foo);

    log::info!(
        "{} entities in {} type bags",
        entity_bag.len(),
        entity_bag.bag_count()
    );

    for e in &entity_bag {
        e.update();
    }
}
