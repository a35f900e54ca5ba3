mod pathfinding;
