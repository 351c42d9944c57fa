//! Replay an invocation document through the execution pipeline

use anyhow::Result;
use pdguard_hook::PersonalDataHook;
use pdguard_host::{ExecutionPipeline, Operation, PipelineError};
use pdguard_store::InMemoryStore;
use tracing::info;

use crate::commands::ReplayArgs;
use crate::error::CliError;
use crate::invocation::{Invocation, load_config};
use crate::output;

pub fn execute(args: &ReplayArgs, json: bool) -> Result<()> {
    let invocation = Invocation::load(&args.invocation)?;
    let mut config = load_config(args.config.as_deref())?;
    if args.show_values {
        config = config.with_redact_values(false);
    }

    let seeded = invocation.seed.len();
    let store = InMemoryStore::seeded(invocation.seed).map_err(CliError::Seed)?;
    let pipeline = ExecutionPipeline::new(store).with_hook(PersonalDataHook::new(config));
    info!(
        seeded,
        operation = %invocation.operation,
        entity = %invocation.target.logical_name,
        "Replaying invocation"
    );

    let logical_name = invocation.target.logical_name.clone();
    let id = match invocation.operation {
        Operation::Create => pipeline.create(invocation.user_id, invocation.target),
        Operation::Update => pipeline.update(invocation.user_id, invocation.target),
    }
    .map_err(CliError::from)?;

    let record = pipeline
        .store()
        .retrieve(&logical_name, id)
        .map_err(|e| CliError::from(PipelineError::from(e)))?;
    output::print_record(&record, json);
    Ok(())
}
