/// The six piece kinds. Closed enum so every dispatch on piece type is
/// exhaustiveness-checked at compile time.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PieceClass {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PieceTeam {
    Light,
    Dark,
}

impl PieceTeam {
    pub fn opponent(self) -> Self {
        match self {
            PieceTeam::Light => PieceTeam::Dark,
            PieceTeam::Dark => PieceTeam::Light,
        }
    }

    /// Row delta a pawn of this team advances by. Light's back rank is
    /// row 7, so Light pawns march toward row 0.
    pub fn pawn_row_step(self) -> i8 {
        match self {
            PieceTeam::Light => -1,
            PieceTeam::Dark => 1,
        }
    }

    /// Row a pawn of this team starts on.
    pub fn pawn_start_row(self) -> i8 {
        match self {
            PieceTeam::Light => 6,
            PieceTeam::Dark => 1,
        }
    }

    /// Farthest rank for this team's pawns, where promotion happens.
    pub fn promotion_row(self) -> i8 {
        match self {
            PieceTeam::Light => 0,
            PieceTeam::Dark => 7,
        }
    }

    /// Back rank holding this team's king and rooks at game start.
    pub fn back_row(self) -> i8 {
        match self {
            PieceTeam::Light => 7,
            PieceTeam::Dark => 0,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PieceRecord {
    pub class: PieceClass,
    pub team: PieceTeam,
}

impl PieceRecord {
    pub fn new(class: PieceClass, team: PieceTeam) -> Self {
        PieceRecord { class, team }
    }

    /// FEN letter for this piece (uppercase for Light).
    pub fn fen_char(&self) -> char {
        let lower = match self.class {
            PieceClass::Pawn => 'p',
            PieceClass::Knight => 'n',
            PieceClass::Bishop => 'b',
            PieceClass::Rook => 'r',
            PieceClass::Queen => 'q',
            PieceClass::King => 'k',
        };
        match self.team {
            PieceTeam::Light => lower.to_ascii_uppercase(),
            PieceTeam::Dark => lower,
        }
    }

    pub fn from_fen_char(c: char) -> Option<Self> {
        let team = if c.is_ascii_uppercase() {
            PieceTeam::Light
        } else {
            PieceTeam::Dark
        };
        let class = match c.to_ascii_lowercase() {
            'p' => PieceClass::Pawn,
            'n' => PieceClass::Knight,
            'b' => PieceClass::Bishop,
            'r' => PieceClass::Rook,
            'q' => PieceClass::Queen,
            'k' => PieceClass::King,
            _ => return None,
        };
        Some(PieceRecord { class, team })
    }
}
