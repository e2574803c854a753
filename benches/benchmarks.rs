use criterion::*;
use nalgebra_glm::{Mat4, Vec3};
use sift_ecs::prelude::*;

const COUNT: usize = 10000;

#[derive(Default, Component)]
struct Transform(Mat4);

#[derive(Default, Component)]
struct Translation(Vec3);

#[derive(Default, Component)]
struct Rotation(Vec3);

#[derive(Default, Component)]
struct Velocity(Vec3);

fn populate(registry: &mut Registry, count: usize) -> Vec<Entity> {
    (0..count)
        .map(|_| {
            registry
                .spawn()
                .with(Transform::default())
                .with(Translation::default())
                .with(Rotation::default())
                .with(Velocity(Vec3::new(1.0, 0.0, 0.0)))
                .id()
        })
        .collect()
}

fn with_systems() -> Registry {
    let mut registry = Registry::with_config(RegistryConfig::new().with_entity_capacity(COUNT));
    registry.add_system(
        Filter::of::<(Transform, Translation, Velocity, Rotation)>(),
        |store: &mut EntityStore, entities: &[Entity], _: Option<f64>| {
            for entity in entities {
                let v = store.get_component::<Velocity>(*entity).unwrap().0;
                let r = store.get_component::<Rotation>(*entity).unwrap().0;
                let t = store.get_component_mut::<Translation>(*entity).unwrap();
                t.0 += v;
                let t = t.0;
                store.get_component_mut::<Transform>(*entity).unwrap().0 =
                    Mat4::new_translation(&t) * Mat4::new_rotation(r);
            }
        },
    );
    registry.add_system(Filter::of::<(Velocity,)>(), |_: &mut EntityStore, _: &[Entity], _: Option<f64>| {});
    registry
}

fn create_entities(c: &mut Criterion) {
    c.bench_function("Create entities", |b| {
        b.iter_batched(
            with_systems,
            |mut registry| populate(&mut registry, COUNT),
            BatchSize::PerIteration,
        );
    });
}

fn component_churn(c: &mut Criterion) {
    c.bench_function("Remove and re-add a component", |b| {
        let mut registry = with_systems();
        let entities = populate(&mut registry, COUNT);

        b.iter(|| {
            for entity in entities.iter().step_by(16) {
                registry.remove_component::<Velocity>(*entity);
            }
            for entity in entities.iter().step_by(16) {
                registry.add_component(*entity, Velocity(Vec3::new(0.0, 1.0, 0.0)));
            }
        });
    });
}

fn tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tick");
    group.bench_function("All entities matched", |b| {
        let mut registry = with_systems();
        populate(&mut registry, COUNT);
        b.iter(|| registry.tick_with(1.0 / 60.0));
    });

    group.bench_function("Few entities matched", |b| {
        let mut registry = with_systems();
        for entity in populate(&mut registry, COUNT).iter().skip(COUNT / 100) {
            registry.remove_component::<Rotation>(*entity);
        }
        b.iter(|| registry.tick_with(1.0 / 60.0));
    });
}

criterion_group!(
    benchmarks,
    create_entities,
    component_churn,
    tick,
);
criterion_main!(benchmarks);
