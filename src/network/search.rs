use log::trace;

use super::route::{RouteTable, ROUTE_KEYS};
use super::{is_valid_route, MAX_PATH};
use crate::board::{Board, Cell, Coord, Edge};

/// Working memory for one path search. Owned by the caller and reset at the
/// start of every search; never shared between concurrent searches.
pub struct PathSearch {
    stack: Vec<Edge>,
    route: RouteTable,
    visited: [bool; ROUTE_KEYS],
    path: Vec<Cell>,
}

impl Default for PathSearch {
    fn default() -> Self { Self::new() }
}

impl PathSearch {
    pub fn new() -> Self {
        Self {
            stack: Vec::with_capacity(32),
            route: RouteTable::new(),
            visited: [false; ROUTE_KEYS],
            path: Vec::with_capacity(MAX_PATH),
        }
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.route.clear();
        self.visited = [false; ROUTE_KEYS];
        self.path.clear();
    }

    fn is_visited(&self, id: usize) -> bool {
        self.visited.get(id).copied().unwrap_or(false)
    }

    fn set_visited(&mut self, id: usize, v: bool) {
        if let Some(slot) = self.visited.get_mut(id) { *slot = v; }
    }

    fn record(&mut self, edge: &Edge) {
        self.route.insert(edge.to.id(), edge.from.id());
        self.set_visited(edge.to.id(), true);
    }

    /// Abandons the branch below `next.from`: walks parent pointers up from
    /// `parent`, dropping each route entry and its visited mark.
    fn roll_back(&mut self, next: &Edge, mut parent: usize) {
        let stop = next.from.id();
        while parent != stop {
            let Some(up) = self.route.find(parent) else { break };
            self.route.remove(parent);
            self.set_visited(parent, false);
            parent = up;
        }
    }

    /// Rebuilds the start..=target path from the route table into `self.path`.
    /// Fails when the chain is broken or longer than `MAX_PATH`.
    fn rebuild(&mut self, start_id: usize, target: Cell, board: &Board) -> bool {
        self.path.clear();
        self.path.push(target);
        let mut parent = target.id();
        loop {
            let Some(up) = self.route.find(parent) else { return false };
            let Some(cell) = board.cell_by_id(up) else { return false };
            if self.path.len() == MAX_PATH { return false; }
            self.path.push(cell);
            parent = up;
            if parent == start_id { break; }
        }
        self.path.reverse();
        true
    }

    /// Depth-first search for a valid network from `start` to `target`.
    /// Returns the chips of the first valid route found.
    pub fn search(&mut self, start: Coord, target: Coord, board: &Board) -> Option<Vec<Cell>> {
        self.reset();
        let start_cell = board.cell(start)?;
        let target_cell = board.cell(target)?;
        let (start_id, target_id) = (start.id(), target.id());

        self.stack.push(Edge::seed(start_cell));
        let mut prev: Option<Edge> = None;
        while let Some(mut next) = self.stack.pop() {
            if let Some(p) = prev {
                self.roll_back(&next, p.to.id());
            }
            self.record(&next);

            while next.to.id() == target_id {
                if self.rebuild(start_id, target_cell, board) && is_valid_route(&self.path) {
                    trace!("network {} -> {} found: {} chips", start_id, target_id, self.path.len());
                    return Some(self.path.clone());
                }
                let old_child = next.to.id();
                next = self.stack.pop()?;
                self.roll_back(&next, old_child);
                self.record(&next);
            }

            for e in board.edge_list(next.to.pos) {
                if !self.is_visited(e.to.id()) {
                    self.stack.push(e);
                }
            }
            prev = Some(next);
        }
        None
    }
}
