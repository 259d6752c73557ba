//! Square addressing for the 8×8 board
//!
//! Provides newtype coordinates (`File`, `Rank`) and the `Square` value built
//! from them, with conversions between file/rank pairs, 64-based indices and
//! algebraic notation, plus the light/dark color of each square.

use std::fmt;
use std::str::FromStr;

use super::error::{GameError, GameResult};

/// Number of files (columns) on the board
pub const FILE_NUM: i32 = 8;
/// Number of ranks (rows) on the board
pub const RANK_NUM: i32 = 8;
/// Number of squares on the board
pub const SQUARE_NUM: i32 = FILE_NUM * RANK_NUM;

/// 32-bit mask of the repeating square pattern, set bits are dark squares.
///
/// The coloring of ranks 1-4 repeats on ranks 5-8, so one half of the board
/// is enough.
pub const COLOR_BITBOARD: u32 = 0xAA55_AA55;

/// Board coordinate representing a file (column) on the chessboard
///
/// Values range from 0 (file 'a') to 7 (file 'h').
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct File(u8);

impl File {
    /// Create a file from a character ('a'..='h', case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            c @ 'a'..='h' => Some(File(c as u8 - b'a')),
            _ => None,
        }
    }

    /// Convert file to character ('a'..='h')
    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Get the file index (0-7)
    pub fn index(self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for File {
    type Error = GameError;

    fn try_from(value: i32) -> GameResult<Self> {
        if (0..FILE_NUM).contains(&value) {
            Ok(File(value as u8))
        } else {
            Err(GameError::InvalidCoordinate {
                message: format!("file {value} is outside 0-7"),
            })
        }
    }
}

/// Board coordinate representing a rank (row) on the chessboard
///
/// Values range from 0 (rank 1) to 7 (rank 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    /// Create a rank from a number (1-8)
    pub fn from_number(n: u32) -> Option<Self> {
        if (1..=8).contains(&n) {
            Some(Rank((n - 1) as u8))
        } else {
            None
        }
    }

    /// Convert rank to number (1-8)
    pub fn to_number(self) -> u8 {
        self.0 + 1
    }

    /// Get the rank index (0-7)
    pub fn index(self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for Rank {
    type Error = GameError;

    fn try_from(value: i32) -> GameResult<Self> {
        if (0..RANK_NUM).contains(&value) {
            Ok(Rank(value as u8))
        } else {
            Err(GameError::InvalidCoordinate {
                message: format!("rank {value} is outside 0-7"),
            })
        }
    }
}

/// Color of a board square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareColor {
    White,
    Black,
}

impl fmt::Display for SquareColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareColor::White => f.write_str("White"),
            SquareColor::Black => f.write_str("Black"),
        }
    }
}

/// Board square position (file, rank)
///
/// Always on the board: every constructor validates its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: File,
    rank: Rank,
}

impl Square {
    /// Create a square from file and rank indices (both 0-7)
    ///
    /// # Examples
    ///
    /// ```
    /// use blind_chess::game::types::Square;
    ///
    /// let square = Square::new(4, 3).unwrap();
    /// assert_eq!(square.notation(), "e4");
    /// assert!(Square::new(8, 0).is_err());
    /// ```
    pub fn new(file: i32, rank: i32) -> GameResult<Self> {
        Ok(Square {
            file: File::try_from(file)?,
            rank: Rank::try_from(rank)?,
        })
    }

    /// Create a square from its 64-based index (`rank * 8 + file`)
    pub fn from_index(index: i32) -> GameResult<Self> {
        if !(0..SQUARE_NUM).contains(&index) {
            return Err(GameError::InvalidCoordinate {
                message: format!("index {index} is outside 0-63"),
            });
        }
        Square::new(index % FILE_NUM, index / FILE_NUM)
    }

    /// Create a square from algebraic notation such as "e4" (case-insensitive)
    pub fn from_notation(notation: &str) -> GameResult<Self> {
        let mut chars = notation.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(GameError::notation(notation, "expected format \"b7\""));
        };

        let rank_num = rank_char
            .to_digit(10)
            .ok_or_else(|| GameError::notation(notation, "rank is not a number"))?;

        let file = File::from_char(file_char)
            .ok_or_else(|| GameError::notation(notation, "file must be a-h"))?;
        let rank = Rank::from_number(rank_num)
            .ok_or_else(|| GameError::notation(notation, "rank must be 1-8"))?;

        Ok(Square { file, rank })
    }

    /// Square for `index` taken modulo 64, for indices known to be in range
    pub(crate) fn from_index_wrapping(index: usize) -> Square {
        let index = index % SQUARE_NUM as usize;
        Square {
            file: File((index % FILE_NUM as usize) as u8),
            rank: Rank((index / FILE_NUM as usize) as u8),
        }
    }

    /// Iterate over all 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_NUM as usize).map(Square::from_index_wrapping)
    }

    pub fn file(self) -> File {
        self.file
    }

    pub fn rank(self) -> Rank {
        self.rank
    }

    /// 64-based index of the square
    pub fn index(self) -> usize {
        self.rank.index() as usize * FILE_NUM as usize + self.file.index() as usize
    }

    /// Notation string of the square position (ex a1, d3)
    pub fn notation(self) -> String {
        format!("{}{}", self.file.to_char(), self.rank.to_number())
    }

    /// Color of the square, a1 is dark
    pub fn color(self) -> SquareColor {
        let mut index = self.index();
        if index >= 32 {
            index -= 32;
        }

        if (COLOR_BITBOARD >> index) & 1 != 0 {
            SquareColor::Black
        } else {
            SquareColor::White
        }
    }

    /// Square displaced by `(dfile, drank)`, or `None` off the board
    pub fn offset(self, dfile: i32, drank: i32) -> Option<Square> {
        Square::new(
            self.file.index() as i32 + dfile,
            self.rank.index() as i32 + drank,
        )
        .ok()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file.to_char(), self.rank.to_number())
    }
}

impl FromStr for Square {
    type Err = GameError;

    fn from_str(s: &str) -> GameResult<Self> {
        Square::from_notation(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(notation: &str) -> Square {
        Square::from_notation(notation).unwrap()
    }

    #[test]
    fn test_file_to_char() {
        assert_eq!(File(0).to_char(), 'a');
        assert_eq!(File(4).to_char(), 'e');
        assert_eq!(File(7).to_char(), 'h');
        assert_eq!(File::from_char('C'), Some(File(2)));
        assert_eq!(File::from_char('i'), None);
    }

    #[test]
    fn test_rank_from_number() {
        assert_eq!(Rank::from_number(1), Some(Rank(0)));
        assert_eq!(Rank::from_number(4), Some(Rank(3)));
        assert_eq!(Rank::from_number(8), Some(Rank(7)));
        assert_eq!(Rank::from_number(0), None);
        assert_eq!(Rank::from_number(9), None);
    }

    #[test]
    fn test_square_new_out_of_range() {
        for (file, rank) in [(8, 8), (-1, -1), (-1, 5), (5, -1), (0, 8), (8, 0)] {
            assert!(
                matches!(Square::new(file, rank), Err(GameError::InvalidCoordinate { .. })),
                "Square::new({file}, {rank}) should fail"
            );
        }
    }

    #[test]
    fn test_square_index() {
        assert_eq!(Square::new(1, 1).unwrap().index(), 9);
        assert_eq!(Square::new(1, 2).unwrap().index(), 17);
        assert_eq!(Square::new(2, 1).unwrap().index(), 10);
        assert_eq!(Square::new(7, 7).unwrap().index(), 63);
    }

    #[test]
    fn test_index_round_trip() {
        for file in 0..8 {
            for rank in 0..8 {
                let square = Square::new(file, rank).unwrap();
                let back = Square::from_index(square.index() as i32).unwrap();
                assert_eq!(back.file().index() as i32, file);
                assert_eq!(back.rank().index() as i32, rank);
            }
        }
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Square::from_index(63).unwrap().notation(), "h8");
        assert_eq!(Square::from_index(5).unwrap().notation(), "f1");
        assert!(Square::from_index(64).is_err());
        assert!(Square::from_index(-1).is_err());
    }

    #[test]
    fn test_square_notation() {
        assert_eq!(Square::new(0, 0).unwrap().notation(), "a1");
        assert_eq!(Square::new(1, 6).unwrap().notation(), "b7");
        assert_eq!(Square::new(7, 7).unwrap().to_string(), "h8");
    }

    #[test]
    fn test_from_notation() {
        let d4 = sq("d4");
        assert_eq!((d4.file().index(), d4.rank().index()), (3, 3));
        let h7 = sq("H7");
        assert_eq!((h7.file().index(), h7.rank().index()), (7, 6));
        assert_eq!("a1".parse::<Square>().unwrap(), Square::new(0, 0).unwrap());
    }

    #[test]
    fn test_notation_round_trip_is_lowercase() {
        for square in Square::all() {
            let upper = square.notation().to_uppercase();
            assert_eq!(Square::from_notation(&upper).unwrap().notation(), square.notation());
        }
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn test_from_notation_errors() {
        for bad in ["a12", "z1", "bb", "1a", "", "a", "a0", "a9", "é1"] {
            assert!(
                matches!(Square::from_notation(bad), Err(GameError::InvalidNotation { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_square_color() {
        for name in ["a1", "h8", "c1", "d2", "f6", "e5"] {
            assert_eq!(sq(name).color(), SquareColor::Black, "{name} should be dark");
        }
        for name in ["b1", "a8", "c2", "d3", "h1", "d5"] {
            assert_eq!(sq(name).color(), SquareColor::White, "{name} should be light");
        }
    }

    #[test]
    fn test_offset() {
        assert_eq!(sq("a1").offset(1, 2), Some(sq("b3")));
        assert_eq!(sq("a1").offset(-1, 0), None);
        assert_eq!(sq("h8").offset(0, 1), None);
    }
}
