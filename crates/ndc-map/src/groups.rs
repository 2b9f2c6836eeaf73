use ndc_model::{CellValue, RawRecord};

/// Collect `{prefix}_1 ..= {prefix}_{count}`, skipping blanks, in index order.
pub fn collect_group(record: &RawRecord, prefix: &str, count: usize) -> Vec<CellValue> {
    (1..=count)
        .map(|index| record.value(&group_field(prefix, index)))
        .filter(|value| !value.is_blank())
        .cloned()
        .collect()
}

pub(crate) fn group_field(prefix: &str, index: usize) -> String {
    format!("{prefix}_{index}")
}
