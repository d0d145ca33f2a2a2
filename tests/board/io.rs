use reversi_ai::board::Player;
use reversi_ai::error::Error;
use reversi_ai::replay::MoveLog;
use reversi_ai::reversi::{parse_transcript, Coord, Layout, Move, ReversiBoard};

#[test]
fn coord_notation() {
    assert_eq!(Coord::from_xy(1, 1), "a1".parse::<Coord>().unwrap());
    assert_eq!(Coord::from_xy(3, 4), "c4".parse::<Coord>().unwrap());
    assert_eq!(Coord::from_xy(8, 8), "h8".parse::<Coord>().unwrap());

    assert_eq!("c4", Coord::from_xy(3, 4).to_string());
    assert_eq!("Coord(3, 4)", format!("{:?}", Coord::from_xy(3, 4)));
    assert_eq!("Move(o, f5)", format!("{:?}", Move::new(Coord::from_xy(6, 5), Player::Two)));
}

#[test]
fn coord_notation_round_trip() {
    for coord in Coord::all() {
        assert_eq!(coord, coord.to_string().parse::<Coord>().unwrap());
    }
}

#[test]
fn bad_coord_notation() {
    for s in ["", "a", "a0", "a9", "i1", "A1", "c4c4"] {
        assert_eq!(Err(Error::InvalidNotation(s.to_owned())), s.parse::<Coord>(), "{:?}", s);
    }
    assert_eq!(Ok(Coord::from_xy(3, 4)), " c4 ".parse::<Coord>());
}

#[test]
fn transcript() {
    let coords = parse_transcript("  c4 c3\n d3 ").unwrap();
    assert_eq!(
        vec![Coord::from_xy(3, 4), Coord::from_xy(3, 3), Coord::from_xy(4, 3)],
        coords
    );

    assert_eq!(Ok(vec![]), parse_transcript(""));
    assert_eq!(Err(Error::InvalidNotation("c4,c3".to_owned())), parse_transcript("c4,c3"));
}

#[test]
fn standard_diagram() {
    let expected = "\
........
........
........
...ox...
...xo...
........
........
........";

    assert_eq!(expected, Layout::standard().to_diagram());
    assert_eq!(expected, ReversiBoard::default().to_diagram());
    assert_eq!(Layout::standard(), expected.parse::<Layout>().unwrap());
}

#[test]
fn bad_diagram() {
    let too_short = "........\n........";
    assert_eq!(
        Err(Error::InvalidDiagram(too_short.to_owned())),
        too_short.parse::<Layout>()
    );

    let bad_char = "........\n".repeat(7) + "...y....";
    assert_eq!(Err(Error::InvalidDiagram(bad_char.clone())), bad_char.parse::<Layout>());
}

#[test]
fn board_display() {
    let log = MoveLog::from_transcript(Layout::standard(), "c4").unwrap();
    let board = log.replay_all();

    let expected = "\
1 ........
2 ........
3 ........
4 ..xxx...    o to move
5 ...xo...    x 4 - o 1
6 ........
7 ........
8 ........
  abcdefgh
";
    assert_eq!(expected, board.to_string());
    assert_eq!(
        "ReversiBoard(\"......../......../......../..xxx.../...xo.../......../......../........\", moves_played: 1)",
        format!("{:?}", board)
    );
}
