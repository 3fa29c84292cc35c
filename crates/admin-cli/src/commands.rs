use std::sync::Arc;

use anyhow::{Context as _, Result, bail};
use tracing::{debug, warn};

use admin_api::{HttpClient, Settings};
use admin_model::{Card, RecordId, ResourceKind, User};
use admin_query::QueryCache;
use admin_table::{
    DeleteFlow, DisplayOptions, MutationCoordinator, MutationOutcome, PageLoader, ResourceScreen,
    StatusDialog, TableBody, TableRecord, TableState,
};
use admin_cli::prompt::confirm;
use admin_cli::render::{footer, render_table};

use crate::cli::{DeleteArgs, ListArgs, SetStatusArgs};

/// Shared state of one CLI invocation.
pub struct Context {
    client: Arc<HttpClient>,
    page_size: u32,
    display: DisplayOptions,
}

impl Context {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = HttpClient::new(&settings.api).context("create API client")?;
        debug!(base_url = client.base_url(), "Using admin API");
        Ok(Self {
            client: Arc::new(client),
            page_size: settings.display.page_size,
            display: DisplayOptions {
                utc_offset_hours: settings.display.utc_offset_hours,
            },
        })
    }
}

// =============================================================================
// LIST
// =============================================================================

pub async fn run_list(ctx: &Context, args: &ListArgs) -> Result<i32> {
    match ResourceKind::from(args.resource) {
        ResourceKind::Cards => list::<Card>(ctx, args).await,
        ResourceKind::Users => list::<User>(ctx, args).await,
    }
}

async fn list<R: TableRecord>(ctx: &Context, args: &ListArgs) -> Result<i32> {
    let page_size = args.page_size.unwrap_or(ctx.page_size);
    let mut screen = ResourceScreen::<R>::new(page_size, ctx.display);

    if let Some(column) = &args.sort {
        apply_sort(&mut screen.table, column, args.order.into())?;
    }
    if let Some(filter) = &args.filter {
        screen.table.set_filter(R::KIND.filter_column(), filter);
    }
    screen.table.set_page_index(args.page.saturating_sub(1));
    for column in &args.hide {
        if !screen.table.set_column_visibility(column, false) {
            warn!(%column, "Column cannot be hidden");
        }
    }

    let loader = PageLoader::new(Arc::clone(&ctx.client), QueryCache::new());
    load_settled(&mut screen, &loader).await;

    println!("{}", R::KIND.title());
    println!("{}", render_table(&screen));
    println!("{}", footer(&screen));
    Ok(match screen.body() {
        TableBody::Failed(_) => 1,
        _ => 0,
    })
}

/// Cycles the column's sort until it matches the requested order.
fn apply_sort(state: &mut TableState, column: &str, order: admin_model::SortOrder) -> Result<()> {
    if !state.toggle_sort(column) {
        let sortable: Vec<_> = state
            .columns()
            .iter()
            .filter(|c| c.sortable)
            .map(|c| c.id)
            .collect();
        bail!(
            "column `{column}` cannot be sorted (sortable: {})",
            sortable.join(", ")
        );
    }
    if order == admin_model::SortOrder::Desc {
        state.toggle_sort(column);
    }
    Ok(())
}

/// Loads the current page, following page-index clamps until it settles.
async fn load_settled<R: TableRecord>(
    screen: &mut ResourceScreen<R>,
    loader: &PageLoader<R, HttpClient>,
) {
    loop {
        let ticket = screen.begin_load();
        let result = loader.load(ticket.key().clone()).await;
        if !screen.finish_load(&ticket, result) {
            break;
        }
        debug!(page = screen.table.page_index() + 1, "Requested page out of range, clamped");
    }
}

// =============================================================================
// DELETE
// =============================================================================

pub async fn run_delete(ctx: &Context, args: &DeleteArgs) -> Result<i32> {
    let id = RecordId::new(args.id.as_str()).context("record id")?;
    match ResourceKind::from(args.resource) {
        ResourceKind::Cards => delete::<Card>(ctx, id, args.yes).await,
        ResourceKind::Users => delete::<User>(ctx, id, args.yes).await,
    }
}

async fn delete<R: TableRecord>(ctx: &Context, id: RecordId, yes: bool) -> Result<i32> {
    let mut flow = DeleteFlow::default();
    flow.stage(id.clone());

    let label = R::KIND.singular_label().to_lowercase();
    if !confirm(&format!("Are you sure you want to delete {label} {id}?"), yes)? {
        flow.cancel();
        println!("Cancelled.");
        return Ok(0);
    }
    let Some(confirmed) = flow.confirm() else {
        return Ok(0);
    };

    let coordinator = MutationCoordinator::<R, _>::new(Arc::clone(&ctx.client), QueryCache::new());
    let outcome = coordinator.delete_record(confirmed).await;
    flow.finish(&outcome.id, outcome.succeeded());
    Ok(report(&outcome))
}

// =============================================================================
// SET STATUS
// =============================================================================

pub async fn run_set_status(ctx: &Context, args: &SetStatusArgs) -> Result<i32> {
    let id = RecordId::new(args.id.as_str()).context("record id")?;
    let active = args.status.is_active();
    match ResourceKind::from(args.resource) {
        ResourceKind::Cards => set_status::<Card>(ctx, id, active, args.yes).await,
        ResourceKind::Users => set_status::<User>(ctx, id, active, args.yes).await,
    }
}

async fn set_status<R: TableRecord>(
    ctx: &Context,
    id: RecordId,
    active: bool,
    yes: bool,
) -> Result<i32> {
    let mut dialog = StatusDialog::default();
    dialog.open(id.clone(), !active);

    let question = dialog
        .prompt(R::KIND.singular_label())
        .unwrap_or_default();
    if !confirm(&format!("{question} ({id})"), yes)? {
        dialog.cancel();
        println!("Cancelled.");
        return Ok(0);
    }
    let Some(change) = dialog.confirm() else {
        return Ok(0);
    };

    let coordinator = MutationCoordinator::<R, _>::new(Arc::clone(&ctx.client), QueryCache::new());
    let outcome = coordinator.set_status(change).await;
    dialog.finish(&outcome.id, outcome.succeeded());
    Ok(report(&outcome))
}

/// Prints a mutation outcome and returns the exit code.
fn report(outcome: &MutationOutcome) -> i32 {
    match &outcome.result {
        Ok(()) => {
            println!("{}", outcome.notification);
            0
        }
        Err(err) => {
            eprintln!("error: {} {}", outcome.notification, err.user_message());
            debug!(error = %err, "Mutation failed");
            1
        }
    }
}
