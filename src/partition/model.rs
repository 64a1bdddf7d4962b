use itertools::Itertools;
use std::fmt;
use std::sync::Arc;

/// Identifies the component model (and baseline prior) of a group of sites.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelId {
    pub name: String,
    pub length: usize,
}

impl ModelId {
    pub fn new(name: impl Into<String>, length: usize) -> Self {
        Self {
            name: name.into(),
            length,
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.length)
    }
}

/// One site occurrence: `length` alignment columns starting at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub sequence_index: usize,
    pub position: usize,
    pub length: usize,
    pub reverse: bool,
}

impl Range {
    pub fn overlaps(&self, other: &Range) -> bool {
        let (left, right) = if self.position <= other.position {
            (self, other)
        } else {
            (other, self)
        };
        // distances instead of end points, which may not fit in a usize
        self.sequence_index == other.sequence_index
            && right.position - left.position < left.length
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.sequence_index, self.position)?;
        if self.reverse {
            write!(f, "!")?;
        }
        Ok(())
    }
}

/// All sites assigned to one cluster. Sites always share the model length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subset {
    model_id: ModelId,
    ranges: Vec<Range>,
}

impl Subset {
    pub fn new(model_id: ModelId) -> Self {
        Self {
            model_id,
            ranges: Vec::new(),
        }
    }

    pub fn push_site(&mut self, sequence_index: usize, position: usize, reverse: bool) {
        self.ranges.push(Range {
            sequence_index,
            position,
            length: self.model_id.length,
            reverse,
        });
    }

    pub fn model_id(&self) -> &ModelId {
        &self.model_id
    }

    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{{{}}}", self.model_id, self.ranges.iter().join(", "))
    }
}

/// One clustering sample. Subsets are shared with the clusters built from them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition {
    subsets: Vec<Arc<Subset>>,
}

impl Partition {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, subset: Subset) {
        self.subsets.push(Arc::new(subset));
    }

    pub fn push_shared(&mut self, subset: Arc<Subset>) {
        self.subsets.push(subset);
    }

    pub fn subsets(&self) -> &[Arc<Subset>] {
        &self.subsets
    }

    pub fn len(&self) -> usize {
        self.subsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }

    pub fn num_sites(&self) -> usize {
        self.subsets.iter().map(|s| s.len()).sum()
    }

    /// Pairs of sites from different subsets covering a common column.
    pub fn overlapping_sites(&self) -> Vec<(Range, Range)> {
        let mut overlaps = Vec::new();
        for (i, first) in self.subsets.iter().enumerate() {
            for second in &self.subsets[i + 1..] {
                for a in first.ranges() {
                    for b in second.ranges() {
                        if a.overlaps(b) {
                            overlaps.push((*a, *b));
                        }
                    }
                }
            }
        }
        overlaps
    }
}

impl FromIterator<Subset> for Partition {
    fn from_iter<I: IntoIterator<Item = Subset>>(iter: I) -> Self {
        Self {
            subsets: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.subsets.is_empty() {
            return write!(f, "-");
        }
        write!(f, "{}", self.subsets.iter().join(", "))
    }
}

pub type PartitionList = Vec<Partition>;

pub fn render_partition_list(partitions: &[Partition]) -> String {
    partitions.iter().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sites_inherit_model_length() {
        let mut subset = Subset::new(ModelId::new("baseline-default", 6));
        subset.push_site(0, 3, false);
        subset.push_site(2, 10, true);
        assert!(subset.ranges().iter().all(|r| r.length == 6));
        assert_eq!(subset.len(), 2);
    }

    #[test]
    fn model_ids_compare_name_and_length() {
        assert_eq!(ModelId::new("a", 3), ModelId::new("a", 3));
        assert_ne!(ModelId::new("a", 3), ModelId::new("a", 4));
        assert_ne!(ModelId::new("a", 3), ModelId::new("b", 3));
    }

    #[test]
    fn render_partition() {
        let mut subset = Subset::new(ModelId::new("baseline-default", 6));
        subset.push_site(0, 3, false);
        subset.push_site(0, 41, true);
        let partition: Partition = vec![subset, Subset::new(ModelId::new("bg", 1))]
            .into_iter()
            .collect();
        assert_eq!(
            partition.to_string(),
            "baseline-default:6:{(0, 3), (0, 41)!}, bg:1:{}"
        );
        assert_eq!(Partition::empty().to_string(), "-");
    }

    #[test]
    fn find_overlapping_sites() {
        let mut first = Subset::new(ModelId::new("a", 4));
        first.push_site(0, 0, false);
        let mut second = Subset::new(ModelId::new("b", 2));
        second.push_site(0, 3, true);
        second.push_site(1, 0, false);
        let partition: Partition = vec![first, second].into_iter().collect();
        let overlaps = partition.overlapping_sites();
        assert_eq!(overlaps.len(), 1);
        assert_eq!(overlaps[0].1.position, 3);
    }

    #[test]
    fn overlaps_near_usize_max() {
        let mut first = Subset::new(ModelId::new("a", 2));
        first.push_site(0, usize::MAX, false);
        let mut second = Subset::new(ModelId::new("b", 2));
        second.push_site(0, usize::MAX - 1, false);
        second.push_site(0, 0, false);
        let partition: Partition = vec![first, second].into_iter().collect();
        let overlaps = partition.overlapping_sites();
        assert_eq!(overlaps.len(), 1);
        assert_eq!(overlaps[0].1.position, usize::MAX - 1);
    }
}
