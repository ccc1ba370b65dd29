// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wayfinder CLI entrypoint.
//!
//! Works on documents stored as `<store>/<id>.architecture.json`: prints the canvas projection
//! or a Markdown export, adds a manual connection, or writes a demo document.

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use wayfinder::config::EngineConfig;
use wayfinder::model::{DocumentId, PageId};
use wayfinder::store::{DocumentStore, FolderStore};

const DEFAULT_DEMO_ID: &str = "demo";

fn print_usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {program} [--store <dir>] [--config <file>] --doc <id> --graph");
    eprintln!("  {program} [--store <dir>] [--config <file>] --doc <id> --markdown");
    eprintln!(
        "  {program} [--store <dir>] [--config <file>] --doc <id> --connect <source-page> \
         <target-page>"
    );
    eprintln!("  {program} [--store <dir>] [--config <file>] [--doc <id>] --demo");
    eprintln!("  {program} [--store <dir>] --list");
    eprintln!();
    eprintln!("If --store is omitted, the current working directory is used.");
    eprintln!("--demo writes a sample document (id `{DEFAULT_DEMO_ID}` unless --doc is given).");
    eprintln!();
    eprintln!(
        "Set RUST_LOG to change log verbosity and WAYFINDER_LOG_JSON=1 for JSON logs on stderr."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Graph,
    Markdown,
    Connect { source: String, target: String },
    Demo,
    List,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    store_dir: Option<String>,
    doc_id: Option<String>,
    config: Option<String>,
    command: Option<Command>,
}

fn set_once<T>(slot: &mut Option<T>, value: T) -> Result<(), ()> {
    if slot.is_some() {
        return Err(());
    }
    *slot = Some(value);
    Ok(())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--store" => {
                let dir = args.next().ok_or(())?;
                set_once(&mut options.store_dir, dir)?;
            }
            "--doc" => {
                let id = args.next().ok_or(())?;
                set_once(&mut options.doc_id, id)?;
            }
            "--config" => {
                let path = args.next().ok_or(())?;
                set_once(&mut options.config, path)?;
            }
            "--graph" => set_once(&mut options.command, Command::Graph)?,
            "--markdown" => set_once(&mut options.command, Command::Markdown)?,
            "--demo" => set_once(&mut options.command, Command::Demo)?,
            "--list" => set_once(&mut options.command, Command::List)?,
            "--connect" => {
                let source = args.next().ok_or(())?;
                let target = args.next().ok_or(())?;
                set_once(&mut options.command, Command::Connect { source, target })?;
            }
            _ => return Err(()),
        }
    }

    match options.command {
        None => return Err(()),
        Some(Command::Demo | Command::List) => {}
        Some(_) if options.doc_id.is_none() => return Err(()),
        Some(_) => {}
    }
    if options.command == Some(Command::List) && options.doc_id.is_some() {
        return Err(());
    }

    Ok(options)
}

async fn load(
    store: &FolderStore,
    id: &DocumentId,
) -> Result<wayfinder::model::ArchitectureDocument, Box<dyn Error>> {
    store
        .get(id)
        .await?
        .ok_or_else(|| format!("document {id} not found in {}", store.root().display()).into())
}

async fn run(options: CliOptions) -> Result<(), Box<dyn Error>> {
    let config = match options.config.as_deref() {
        Some(path) => EngineConfig::load(Path::new(path))?,
        None => EngineConfig::default(),
    };
    let store = FolderStore::new(options.store_dir.unwrap_or_else(|| ".".to_owned()))
        .with_durability(config.write_durability());

    let Some(command) = options.command else {
        return Err("no command given".into());
    };
    let doc_id = options
        .doc_id
        .as_deref()
        .map(DocumentId::new)
        .transpose()?;

    match command {
        Command::List => {
            for id in store.list()? {
                println!("{id}");
            }
        }
        Command::Demo => {
            let id = match doc_id {
                Some(id) => id,
                None => DocumentId::new(DEFAULT_DEMO_ID)?,
            };
            let doc = wayfinder::demo::demo_document(id)?;
            store.save_document(&doc)?;
            tracing::info!(doc_id = %doc.id, "demo document written");
            println!("{}", store.document_path(&doc.id).display());
        }
        Command::Graph => {
            let id = doc_id.ok_or("--doc is required")?;
            let doc = load(&store, &id).await?;
            let graph = wayfinder::view::project_with(&doc, &config.layout);
            println!("{}", serde_json::to_string_pretty(&graph)?);
        }
        Command::Markdown => {
            let id = doc_id.ok_or("--doc is required")?;
            let doc = load(&store, &id).await?;
            print!("{}", wayfinder::format::to_markdown(&doc));
        }
        Command::Connect { source, target } => {
            let id = doc_id.ok_or("--doc is required")?;
            let source: PageId = source.parse()?;
            let target: PageId = target.parse()?;
            let store: Arc<dyn DocumentStore> = Arc::new(store);
            let mut session = wayfinder::EditorSession::load(store, &id, &config).await?;
            if !session.connect(source.clone(), target.clone(), None, None) {
                println!("unchanged: {source} -> {target} already linked or unknown");
                return Ok(());
            }
            match session.save_now().await {
                wayfinder::autosave::SaveOutcome::Saved { rev } => {
                    println!("connected {source} -> {target} (rev {rev})");
                }
                wayfinder::autosave::SaveOutcome::Failed(err) => return Err(err.into()),
                wayfinder::autosave::SaveOutcome::Skipped(skip) => {
                    return Err(format!("save skipped: {skip:?}").into());
                }
            }
            session.close();
        }
    }

    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "wayfinder".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        wayfinder::logging::init();

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        runtime.block_on(run(options))
    })();

    if let Err(err) = result {
        eprintln!("wayfinder: {err}");
        std::process::exit(1);
    }
}
