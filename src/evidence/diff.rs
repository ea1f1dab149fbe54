//! Line-based unified diff used to preview evidence rewrites.

/// Lines of unchanged context shown around each change.
const CONTEXT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit {
    Keep,
    Remove,
    Add,
}

/// An edit together with the line positions it applies to.
#[derive(Debug, Clone, Copy)]
struct Step<'a> {
    edit: Edit,
    text: &'a str,
    old_line: usize,
    new_line: usize,
}

/// Longest-common-subsequence lengths for every suffix pair, stored flat.
struct SuffixTable {
    width: usize,
    cells: Vec<usize>,
}

impl SuffixTable {
    fn build(old: &[&str], new: &[&str]) -> Self {
        let width = new.len() + 1;
        let mut table = Self {
            width,
            cells: vec![0; (old.len() + 1) * width],
        };
        for (i, old_line) in old.iter().enumerate().rev() {
            for (j, new_line) in new.iter().enumerate().rev() {
                let value = if old_line == new_line {
                    table.at(i + 1, j + 1) + 1
                } else {
                    table.at(i + 1, j).max(table.at(i, j + 1))
                };
                if let Some(cell) = table.cells.get_mut(i * width + j) {
                    *cell = value;
                }
            }
        }
        table
    }

    fn at(&self, i: usize, j: usize) -> usize {
        self.cells.get(i * self.width + j).copied().unwrap_or(0)
    }
}

fn edit_script<'a>(old: &[&'a str], new: &[&'a str]) -> Vec<Step<'a>> {
    let table = SuffixTable::build(old, new);
    let mut steps = Vec::with_capacity(old.len() + new.len());
    let (mut i, mut j) = (0, 0);

    loop {
        let step = match (old.get(i), new.get(j)) {
            (Some(left), Some(right)) if left == right => Step {
                edit: Edit::Keep,
                text: left,
                old_line: i,
                new_line: j,
            },
            (Some(left), Some(_)) if table.at(i + 1, j) >= table.at(i, j + 1) => Step {
                edit: Edit::Remove,
                text: left,
                old_line: i,
                new_line: j,
            },
            (_, Some(right)) => Step {
                edit: Edit::Add,
                text: right,
                old_line: i,
                new_line: j,
            },
            (Some(left), None) => Step {
                edit: Edit::Remove,
                text: left,
                old_line: i,
                new_line: j,
            },
            (None, None) => break,
        };
        match step.edit {
            Edit::Keep => {
                i += 1;
                j += 1;
            }
            Edit::Remove => i += 1,
            Edit::Add => j += 1,
        }
        steps.push(step);
    }
    steps
}

/// Groups change positions into hunk ranges over the edit script.
fn hunk_ranges(steps: &[Step<'_>]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let changes = steps
        .iter()
        .enumerate()
        .filter(|(_, step)| step.edit != Edit::Keep)
        .map(|(index, _)| index);

    for index in changes {
        let start = index.saturating_sub(CONTEXT);
        let end = (index + CONTEXT + 1).min(steps.len());
        match ranges.last_mut() {
            Some(last) if start <= last.1 => last.1 = end,
            _ => ranges.push((start, end)),
        }
    }
    ranges
}

/// Formats a hunk range the way `diff -u` does.
fn format_range(start: usize, length: usize) -> String {
    match length {
        0 => format!("{start},0"),
        1 => format!("{}", start + 1),
        _ => format!("{},{length}", start + 1),
    }
}

/// Renders a unified diff between two texts.
///
/// Returns an empty string when the texts have identical lines.
#[must_use]
pub fn unified_diff(old: &str, new: &str, from_label: &str, to_label: &str) -> String {
    let old_lines: Vec<&str> = old.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();
    let steps = edit_script(&old_lines, &new_lines);
    let ranges = hunk_ranges(&steps);
    if ranges.is_empty() {
        return String::new();
    }

    let mut output = format!("--- {from_label}\n+++ {to_label}\n");
    for (start, end) in ranges {
        let hunk = steps.get(start..end).unwrap_or_default();
        let Some(first) = hunk.first() else {
            continue;
        };
        let old_count = hunk.iter().filter(|step| step.edit != Edit::Add).count();
        let new_count = hunk.iter().filter(|step| step.edit != Edit::Remove).count();
        output.push_str(&format!(
            "@@ -{} +{} @@\n",
            format_range(first.old_line, old_count),
            format_range(first.new_line, new_count)
        ));
        for step in hunk {
            let marker = match step.edit {
                Edit::Keep => ' ',
                Edit::Remove => '-',
                Edit::Add => '+',
            };
            output.push(marker);
            output.push_str(step.text);
            output.push('\n');
        }
    }
    output.trim_end_matches('\n').to_owned()
}
