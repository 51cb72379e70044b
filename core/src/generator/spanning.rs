use rand::Rng;

use super::*;

/// Builds the wiring from a random minimum spanning tree of the board, then scrambles it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SpanningTreeGenerator;

impl LayoutGenerator for SpanningTreeGenerator {
    fn generate<R: Rng + ?Sized>(
        &self,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<GeneratedLayout> {
        let edges = candidate_edges(config.size, config.max_weight, rng);
        let tree = kruskal(&edges, config.size)?;
        log::debug!(
            "Spanning tree over {}x{} kept {} of {} candidate edges",
            config.size.0,
            config.size.1,
            tree.len(),
            edges.len()
        );

        let mut solved = TileGrid::new(config.size);
        apply_tree(&mut solved, &tree)?;
        designate_source(&mut solved, config.source)?;

        let mut board = solved.clone();
        scramble(&mut board, rng);

        Ok(GeneratedLayout {
            tree,
            solved,
            board,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn degree(tree: &[Edge], coords: Coord2) -> u32 {
        tree.iter()
            .filter(|edge| edge.from == coords || edge.to == coords)
            .count() as u32
    }

    #[test]
    fn solved_layout_matches_tree_degrees() {
        let config = GameConfig::new((5, 4));
        let layout = SpanningTreeGenerator
            .generate(&config, &mut SmallRng::seed_from_u64(21))
            .unwrap();

        assert_eq!(layout.tree.len(), 19);
        for coords in layout.solved.iter_coords() {
            let stubs = layout.solved[coords].wires().bits().count_ones();
            assert_eq!(stubs, degree(&layout.tree, coords));
            assert!(stubs >= 1);
            assert_eq!(
                layout.board[coords].wires().bits().count_ones(),
                stubs,
                "scrambling changed the stub count at {coords:?}"
            );
        }
    }

    #[test]
    fn solved_layout_stubs_are_symmetric() {
        let config = GameConfig::new((6, 6));
        let layout = SpanningTreeGenerator
            .generate(&config, &mut SmallRng::seed_from_u64(5))
            .unwrap();

        for coords in layout.solved.iter_coords() {
            for direction in layout.solved[coords].wires().directions() {
                assert!(
                    layout.solved.connected_neighbor(coords, direction).is_some(),
                    "{coords:?} opens {direction:?} without a partner"
                );
            }
        }
    }

    #[test]
    fn source_is_placed_on_both_boards() {
        let config = GameConfig::new((3, 3)).with_source((2, 1));
        let layout = SpanningTreeGenerator
            .generate(&config, &mut SmallRng::seed_from_u64(8))
            .unwrap();

        assert!(layout.solved[(2, 1)].is_source());
        assert!(layout.board[(2, 1)].is_source());
        assert_eq!(layout.board.source_count(), 1);
    }

    #[test]
    fn same_seed_same_layout() {
        let config = GameConfig::new((7, 5));
        let first = SpanningTreeGenerator
            .generate(&config, &mut SmallRng::seed_from_u64(1234))
            .unwrap();
        let second = SpanningTreeGenerator
            .generate(&config, &mut SmallRng::seed_from_u64(1234))
            .unwrap();
        assert_eq!(first, second);
    }
}
