/// Fixed palette offered as team-color defaults, in round-robin order.
pub const TEAM_COLORS: [&str; 6] = [
    "#10B981", // emerald
    "#F59E0B", // amber
    "#3B82F6", // blue
    "#EF4444", // red
    "#8B5CF6", // violet
    "#EC4899", // pink
];
