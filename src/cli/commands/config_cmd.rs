//! cli::commands::config_cmd
//!
//! Configuration management: API key, model selection, reset.
//!
//! All three touch only the configuration store; none of them require a
//! repository. Key input is masked and never echoed; replacing an
//! existing key or wiping the configuration asks for confirmation
//! first.

use anyhow::{bail, Result};

use crate::cli::args::ConfigAction;
use crate::engine::{run_guards, Context, LocalWorkspace, Requirements};
use crate::model::catalog::{DEFAULT_MODEL, MODELS, PAID_MODELS};
use crate::ui::{output, prompts};

use super::prompt_failure;

pub fn run(ctx: &Context, action: ConfigAction) -> Result<()> {
    let workspace = LocalWorkspace::new(ctx.cwd());
    run_guards(&Requirements::CONFIG, ctx, &workspace)?;

    match action {
        ConfigAction::Key { key } => set_key(ctx, key),
        ConfigAction::Model => select_model(ctx),
        ConfigAction::Reset => reset(ctx),
    }
}

fn set_key(ctx: &Context, key: Option<String>) -> Result<()> {
    if ctx.store.get().api_key.is_some() {
        let replace = prompts::confirm(
            "an api key is already configured. replace it?",
            false,
            ctx.interactive,
        )
        .map_err(|e| prompt_failure(e, "nothing changed!"))?;
        if !replace {
            bail!("nothing changed!");
        }
    }

    let key = match key {
        Some(key) => key,
        None => prompts::password("enter your api key", ctx.interactive)
            .map_err(|e| prompt_failure(e, "nothing changed!"))?,
    };
    let key = key.trim().to_string();
    if key.is_empty() {
        bail!("the api key is empty.\nnothing changed!");
    }

    ctx.store.update(|mut doc| {
        doc.api_key = Some(key.clone());
        doc
    });
    output::success("noto api key configured!", ctx.quiet);
    Ok(())
}

fn select_model(ctx: &Context) -> Result<()> {
    let current = ctx.store.get().model;
    let default = current
        .as_deref()
        .and_then(|model| MODELS.iter().position(|m| *m == model))
        .or_else(|| MODELS.iter().position(|m| *m == DEFAULT_MODEL));

    let index = prompts::select("select a model", MODELS, default, ctx.interactive)
        .map_err(|e| prompt_failure(e, "nothing selected!"))?;
    let model = MODELS[index];

    if PAID_MODELS.contains(&model) {
        let proceed = prompts::confirm(
            "this model has no free quota and will incur costs. continue?",
            false,
            ctx.interactive,
        )
        .map_err(|e| prompt_failure(e, "nothing changed!"))?;
        if !proceed {
            bail!("nothing changed!");
        }
    }

    ctx.store.update(|mut doc| {
        doc.model = Some(model.to_string());
        doc
    });
    output::success(format!("model set to {}", model), ctx.quiet);
    Ok(())
}

fn reset(ctx: &Context) -> Result<()> {
    let confirmed = prompts::confirm(
        "reset the configuration? this removes the api key, model choice, and cache.",
        false,
        ctx.interactive,
    )
    .map_err(|e| prompt_failure(e, "nothing changed!"))?;
    if !confirmed {
        bail!("nothing changed!");
    }

    ctx.store.clear();
    output::success("configuration reset!", ctx.quiet);
    Ok(())
}
