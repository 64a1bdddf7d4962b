use crate::motif;
use crate::partition::{ModelId, Subset};
use crate::utils::{Background, Matrix, MotifError, Result, NUM_BASES};
use std::sync::Arc;

// Statistics never look at gaps: counts_gap and alpha_gap are carried along
// for reporting only.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    counts: Matrix,
    counts_gap: Vec<f64>,
    alpha: Matrix,
    alpha_gap: Vec<f64>,
    components: usize,
    identifier: usize,
    model_id: ModelId,
    sites: Arc<Subset>,
}

impl Cluster {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        counts: Matrix,
        counts_gap: Vec<f64>,
        alpha: Matrix,
        alpha_gap: Vec<f64>,
        components: usize,
        identifier: usize,
        model_id: ModelId,
        sites: Arc<Subset>,
    ) -> Result<Self> {
        let length = model_id.length;
        let has_shape = |matrix: &Matrix| {
            matrix.len() == NUM_BASES && matrix.iter().all(|row| row.len() == length)
        };
        if !has_shape(&counts)
            || !has_shape(&alpha)
            || counts_gap.len() != length
            || alpha_gap.len() != length
        {
            return Err(MotifError::Domain(format!(
                "Counts matrix has invalid dimension for model {}",
                model_id
            )));
        }
        Ok(Self {
            counts,
            counts_gap,
            alpha,
            alpha_gap,
            components,
            identifier,
            model_id,
            sites,
        })
    }

    pub fn counts(&self) -> &Matrix {
        &self.counts
    }

    pub fn counts_gap(&self) -> &[f64] {
        &self.counts_gap
    }

    pub fn alpha(&self) -> &Matrix {
        &self.alpha
    }

    pub fn alpha_gap(&self) -> &[f64] {
        &self.alpha_gap
    }

    pub fn components(&self) -> usize {
        self.components
    }

    pub fn identifier(&self) -> usize {
        self.identifier
    }

    pub(crate) fn set_identifier(&mut self, identifier: usize) {
        self.identifier = identifier;
    }

    pub fn model_id(&self) -> &ModelId {
        &self.model_id
    }

    pub fn sites(&self) -> &Arc<Subset> {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.model_id.length
    }

    pub fn is_empty(&self) -> bool {
        self.model_id.length == 0
    }

    pub fn average_counts(&self) -> f64 {
        motif::average_counts(&self.counts)
    }

    pub fn frequencies(&self) -> Result<Matrix> {
        motif::frequencies(&self.counts)
    }

    pub fn motif(&self) -> Result<Matrix> {
        motif::posterior_motif(&self.counts, &self.alpha)
    }

    pub fn pwm(&self, bg: &Background) -> Result<Matrix> {
        motif::pwm(&self.motif()?, bg)
    }

    pub fn score(&self, bg: &Background, sequence: &[u8]) -> Result<f64> {
        Ok(motif::score(&self.pwm(bg)?, sequence))
    }

    pub fn entropy(&self) -> Result<Vec<f64>> {
        Ok(motif::entropy(&self.motif()?))
    }

    pub fn r_sequence(&self) -> Result<f64> {
        Ok(motif::r_sequence(&self.motif()?))
    }

    /// Counts plus pseudocounts, with the gap row appended last.
    pub fn posterior_counts(&self) -> Matrix {
        let mut posterior: Matrix = self
            .counts
            .iter()
            .zip(&self.alpha)
            .map(|(c, a)| c.iter().zip(a).map(|(c, a)| c + a).collect())
            .collect();
        posterior.push(
            self.counts_gap
                .iter()
                .zip(&self.alpha_gap)
                .map(|(c, a)| c + a)
                .collect(),
        );
        posterior
    }

    /// The same cluster read from the opposite strand.
    pub fn reverse_complement(&self) -> Cluster {
        let reversed = |v: &[f64]| v.iter().rev().copied().collect::<Vec<f64>>();
        Cluster {
            counts: motif::reverse_complement(&self.counts),
            counts_gap: reversed(&self.counts_gap),
            alpha: motif::reverse_complement(&self.alpha),
            alpha_gap: reversed(&self.alpha_gap),
            components: self.components,
            identifier: self.identifier,
            model_id: self.model_id.clone(),
            sites: Arc::clone(&self.sites),
        }
    }

    /// Restricts the cluster to columns `start..end`. Sites are moved so that
    /// they still cover exactly the retained columns.
    pub fn slice(&self, start: usize, end: usize) -> Result<Cluster> {
        let length = self.len();
        if start >= end || end > length {
            return Err(MotifError::InvalidSlice { start, end, length });
        }
        let window = |matrix: &Matrix| -> Matrix {
            matrix.iter().map(|row| row[start..end].to_vec()).collect()
        };

        let model_id = ModelId::new(self.model_id.name.clone(), end - start);
        let mut sites = Subset::new(model_id.clone());
        for site in self.sites.ranges() {
            let position = if site.reverse {
                site.position.saturating_add(site.length - end)
            } else {
                site.position.saturating_add(start)
            };
            sites.push_site(site.sequence_index, position, site.reverse);
        }

        Ok(Cluster {
            counts: window(&self.counts),
            counts_gap: self.counts_gap[start..end].to_vec(),
            alpha: window(&self.alpha),
            alpha_gap: self.alpha_gap[start..end].to_vec(),
            components: self.components,
            identifier: self.identifier,
            model_id,
            sites: Arc::new(sites),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::Rng;

    fn subset(length: usize) -> Arc<Subset> {
        let mut subset = Subset::new(ModelId::new("baseline-default", length));
        subset.push_site(0, 10, false);
        subset.push_site(1, 20, true);
        Arc::new(subset)
    }

    fn random_cluster(length: usize) -> Cluster {
        let mut rng = rand::rng();
        let mut matrix = || -> Matrix {
            (0..NUM_BASES)
                .map(|_| (0..length).map(|_| rng.random_range(0.0..10.0)).collect())
                .collect()
        };
        let counts = matrix();
        let alpha = matrix();
        let gaps: Vec<f64> = (0..length).map(|j| j as f64).collect();
        Cluster::new(
            counts,
            gaps.clone(),
            alpha,
            gaps,
            2,
            7,
            ModelId::new("baseline-default", length),
            subset(length),
        )
        .unwrap()
    }

    #[test]
    fn new_cluster_invalid_dimension() {
        let result = Cluster::new(
            vec![vec![0.0; 3]; 3],
            vec![0.0; 3],
            vec![vec![0.0; 3]; 4],
            vec![0.0; 3],
            0,
            0,
            ModelId::new("x", 3),
            subset(3),
        );
        assert!(result.is_err());
    }

    #[test]
    fn reverse_complement_is_an_involution() {
        for length in 1..8 {
            let cluster = random_cluster(length);
            let twice = cluster.reverse_complement().reverse_complement();
            assert_eq!(twice.counts(), cluster.counts());
            assert_eq!(twice.alpha(), cluster.alpha());
            assert_eq!(twice.counts_gap(), cluster.counts_gap());
        }
    }

    #[test]
    fn reverse_complement_reverses_gaps_only() {
        let cluster = random_cluster(4);
        let rc = cluster.reverse_complement();
        assert_eq!(rc.counts_gap(), &[3.0, 2.0, 1.0, 0.0]);
        assert_eq!(rc.identifier(), 7);
        assert_eq!(rc.components(), 2);
        assert!(Arc::ptr_eq(rc.sites(), cluster.sites()));
    }

    #[test]
    fn motif_columns_sum_to_one() {
        let cluster = random_cluster(6);
        let motif = cluster.motif().unwrap();
        for j in 0..6 {
            let sum: f64 = motif.iter().map(|row| row[j]).sum();
            assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn posterior_counts_append_gap_row() {
        let cluster = random_cluster(3);
        let posterior = cluster.posterior_counts();
        assert_eq!(posterior.len(), NUM_BASES + 1);
        assert_eq!(posterior[4], vec![0.0, 2.0, 4.0]);
        assert_abs_diff_eq!(
            posterior[1][2],
            cluster.counts()[1][2] + cluster.alpha()[1][2]
        );
    }

    #[test]
    fn slice_reanchors_sites() {
        let cluster = random_cluster(6);
        let sliced = cluster.slice(1, 4).unwrap();
        assert_eq!(sliced.len(), 3);
        assert_eq!(sliced.model_id(), &ModelId::new("baseline-default", 3));
        assert_eq!(sliced.counts()[2], cluster.counts()[2][1..4].to_vec());
        let ranges = sliced.sites().ranges();
        // forward site moves right by the window start
        assert_eq!((ranges[0].position, ranges[0].length), (11, 3));
        // reverse site keeps its right end aligned with column 0
        assert_eq!((ranges[1].position, ranges[1].length), (22, 3));
        assert!(ranges[1].reverse);
    }

    #[test]
    fn slice_out_of_bounds() {
        let cluster = random_cluster(4);
        assert!(matches!(
            cluster.slice(2, 5),
            Err(MotifError::InvalidSlice { .. })
        ));
        assert!(cluster.slice(2, 2).is_err());
    }
}
