//! Built-in example puzzles, selectable with `-p <index>`.
//!
//! Kept in the same text format the file loader reads, so the comment and
//! blank-line handling gets exercised even without a puzzle file on hand.

pub const PRESETS: [&str; 6] = [
    // 0: 6 x 6, all unknown
    "# 6 x 6, all unknown
XXXXXX
XXXXXX
XXXXXX
XXXXXX
XXXXXX
XXXXXX
",
    // 1: 14 x 12, all unknown
    "# 14 x 12, all unknown
XXXXXXXXXXXXXX
XXXXXXXXXXXXXX
XXXXXXXXXXXXXX
XXXXXXXXXXXXXX
XXXXXXXXXXXXXX
XXXXXXXXXXXXXX
XXXXXXXXXXXXXX
XXXXXXXXXXXXXX
XXXXXXXXXXXXXX
XXXXXXXXXXXXXX
XXXXXXXXXXXXXX
XXXXXXXXXXXXXX
",
    // 2: 8 x 6 puzzle
    "# 8 x 6 puzzle
1X10XXXX
1XX1X0X1
00XXXXXX
10XXXXXX
01XX1XX1
01XXXXXX
",
    // 3: 12 x 12 daily puzzle
    "# 12 x 12, binairepuzzel.net daily puzzle 2970
XXXX1XX00X0X
XXX0X1XXXXXX
X1XXXX1XXXXX
XX0XXXX1XXXX
XX01XXXXX11X
XXXXXXXXXXXX
XX1XXXX0XXXX
11XXXXXX1XX1
X11XX01X1XXX
XX1XXXXXXXXX
1XXXXXX1XX1X
X0X0XX0XXXXX
",
    // 4: 14 x 14, very difficult
    "# 14 x 14, binairepuzzel.net very difficult nr. 80
XXX1XXXX1XXXXX
1XXX0XX0XX1XXX
XXX1X1XX1XXXX0
XX1XXXXXXXXX1X
0X1XXXXXXXX0XX
0XX0XXX11XXXXX
XX0XXXXXXX1X1X
XXXX0X1XX0X01X
X0XXXXXXXXXXXX
00XXXXXX0XXXXX
XXXXXXXXXXXXXX
X0XXX1XX1X0XXX
1XXXXXXXXX11XX
XXXX11XXXXXXXX
",
    // 5: 6 x 6 without a solution; the three fixed ones on the last row can
    // never be balanced away, which the search only discovers by exhaustion
    "# 6 x 6, unsolvable on purpose
XXXXXX
XXXXXX
XXXXXX
XXXXXX
XXXXXX
XXX111
",
];
