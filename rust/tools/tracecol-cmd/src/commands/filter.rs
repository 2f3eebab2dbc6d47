//! Filter command implementation

use anyhow::Result;
use clap::ValueEnum;
use log::{debug, warn};
use tracecol_storage::{
    FilterOp, FilterPredicate, Operand, RangeOrPositions, SearchValidation, SetIdStorage, Storage,
};

use crate::commands::{check_rows, load_set_id_column};

/// Filter operator as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OpArg {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    IsNull,
    IsNotNull,
}

impl From<OpArg> for FilterOp {
    fn from(op: OpArg) -> FilterOp {
        match op {
            OpArg::Eq => FilterOp::Eq,
            OpArg::Ne => FilterOp::Ne,
            OpArg::Lt => FilterOp::Lt,
            OpArg::Le => FilterOp::Le,
            OpArg::Gt => FilterOp::Gt,
            OpArg::Ge => FilterOp::Ge,
            OpArg::IsNull => FilterOp::IsNull,
            OpArg::IsNotNull => FilterOp::IsNotNull,
        }
    }
}

pub struct FilterArgs {
    pub op: OpArg,
    pub value: Option<i64>,
    pub begin: Option<u32>,
    pub end: Option<u32>,
    pub indices: Option<Vec<u32>>,
    pub sorted: bool,
}

pub fn run(args: FilterArgs, column: String) -> Result<()> {
    let values = load_set_id_column(&column)?;
    let storage = SetIdStorage::new(&values);
    let result = evaluate(&storage, &args)?;

    for range in result.ranges() {
        println!("[{}, {})", range.start, range.end);
    }
    println!("Matched {} rows", result.count());
    Ok(())
}

fn evaluate(storage: &SetIdStorage, args: &FilterArgs) -> Result<RangeOrPositions> {
    let op = FilterOp::from(args.op);
    let predicate = FilterPredicate::new(op, Operand::from(args.value));
    if !op.is_null_check() && args.value.is_none() {
        warn!("no --value given, comparing against null");
    }

    match storage.validate_search_constraints(&predicate) {
        SearchValidation::Ok => {}
        trivial => debug!("{predicate} resolves to {trivial:?} without a scan"),
    }

    if let Some(indices) = &args.indices {
        check_rows(indices, storage.size())?;
        if args.sorted {
            let values = storage.values();
            anyhow::ensure!(
                indices.iter().map(|&i| values[i as usize]).is_sorted(),
                "--sorted was given but the values at --indices are not sorted"
            );
        }
        debug!("index search for {predicate} over {} rows", indices.len());
        return Ok(storage.index_search(&predicate, indices, args.sorted));
    }

    let begin = args.begin.unwrap_or(0);
    let end = args.end.unwrap_or(storage.size());
    anyhow::ensure!(
        begin <= end && end <= storage.size(),
        "Invalid range [{begin}, {end}) for a column of {} rows",
        storage.size()
    );
    Ok(storage.search(&predicate, begin..end))
}
