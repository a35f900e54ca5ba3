/// Explicit-stack recursive backtracker generation
pub mod backtracker;
/// Generation modes and the seeded maze generator
pub mod executor;
/// Weighted Kruskal spanning-tree generation
pub mod kruskal;
/// Breadth-first, depth-first and A* search
pub mod pathfinding;
