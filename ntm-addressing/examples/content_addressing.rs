//! Example: content addressing and gradient diagnostics
//!
//! Demonstrates:
//! 1. Gating raw controller outputs
//! 2. Content lookup with increasing focus
//! 3. Gradient toolkit with a missing gradient and a NaN gradient
//!
//! Run: `RUST_LOG=debug cargo run --example content_addressing`

use ndarray::{array, ArrayD, IxDyn};
use ntm_addressing::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ntm_addressing=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Example 1: Gates
    println!("1. Gates:");
    for raw in [-2.0, 0.0, 2.0] {
        println!("   raw {:>5.1} → sigmoid {:.4}, one_plus {:.4}", raw, sigmoid(raw), one_plus(raw));
    }
    println!();

    // Example 2: Content lookup
    println!("2. Content lookup (M = [[1,0],[0,1],[1,1]], k = [1,0]):");
    let memory = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
    let key = array![1.0, 0.0];
    for beta in [0.0, 1.0, 10.0, 100.0] {
        let weights = content_lookup(&memory, &key, beta);
        println!("   β = {:>5.1} → {:.4}", beta, weights);
    }

    let ctx = AddressingContext::from_raw_strength(memory.view(), key.clone(), 3.0);
    println!("   raw strength 3.0 → β = {:.4}, weights {:.4}", ctx.beta, ctx.lookup());
    println!();

    // Example 3: Gradient toolkit
    println!("3. Gradient toolkit:");
    let mut store = VariableStore::new();
    let mut factory = VariableFactory::with_seed(7);
    factory.random(&mut store, "controller/w", &[2], VariableOptions::default())?;
    factory.zeros(&mut store, "controller/unused", &[2], VariableOptions::default())?;
    factory.ones(&mut store, "controller/gain", &[1], VariableOptions::default())?;

    let loss = ClosureGraph::new()
        .with_gradient("controller/w", |store, feed| {
            let target = feed.get("target")?;
            Ok((store.value("controller/w")? - target) * 2.0)
        })
        .with_gradient("controller/gain", |_, _| {
            Ok(ArrayD::from_elem(IxDyn(&[1]), f64::NAN))
        });

    let mut toolkit = GradientToolkit::new(Sgd::new(0.1), &loss, &store);
    println!("   kept: {:?}", toolkit.filtered_vars());

    let feed = Feed::new().with("target", ArrayD::from_elem(IxDyn(&[2]), 0.5));
    for _ in 0..3 {
        toolkit.diagnose_grads(&mut store, &feed)?;
    }
    println!("   controller/w after 3 steps: {:.4}", store.value("controller/w")?);

    Ok(())
}
