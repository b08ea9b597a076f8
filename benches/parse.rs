use pgntree::ParsedGame;

fn main() {
    divan::main();
}

const PLAIN_GAME: &str = "[Event \"Paris Opera\"]\n\
[Site \"Paris FRA\"]\n\
[Date \"1858.11.02\"]\n\
[White \"Morphy, Paul\"]\n\
[Black \"Duke Karl / Count Isouard\"]\n\
[Result \"1-0\"]\n\
\n\
1. e4 e5 2. Nf3 d6 3. d4 Bg4 4. dxe5 Bxf3 5. Qxf3 dxe5 6. Bc4 Nf6 7. Qb3 Qe7\n\
8. Nc3 c6 9. Bg5 b5 10. Nxb5 cxb5 11. Bxb5+ Nbd7 12. O-O-O Rd8 13. Rxd7 Rxd7\n\
14. Rd1 Qe6 15. Bxd7+ Nxd7 16. Qb8+ Nxb8 17. Rd8# 1-0";

const ANNOTATED_GAME: &str = "[Event \"Rated Blitz game\"]\n\
[Site \"https://lichess.org/abcd1234\"]\n\
[White \"maia1\"]\n\
[Black \"anon\"]\n\
[Result \"1/2-1/2\"]\n\
\n\
{Annotated after the game.} 1. e4 c5 2. Nf3 d6 3. d4 cxd4 4. Nxd4 Nf6\n\
(4... g6 {the accelerated setup} 5. c4) 5. Nc3 a6 {the Najdorf} 6. Be2 e5\n\
7. Nb3 Be7 8. O-O O-O (8... Be6 9. f4) 9. Kh1 Nc6 1/2-1/2";

const UNBRACED_GAME: &str = "[Event \"Club newsletter\"]\n\
[White \"NN\"]\n\
[Black \"NN\"]\n\
\n\
1. e4 c5 Sicilian defence 2. Nf3 a solid developing move 3. d4 cxd4 4. Nxd4\n\
White gets a strong centre 4... Nf6 5. Nc3 *";

#[divan::bench]
fn parse_plain() -> ParsedGame {
    pgntree::parse_game(divan::black_box(PLAIN_GAME)).unwrap()
}

#[divan::bench]
fn parse_annotated() -> ParsedGame {
    pgntree::parse_game(divan::black_box(ANNOTATED_GAME)).unwrap()
}

#[divan::bench]
fn parse_unbraced_annotations() -> ParsedGame {
    pgntree::parse_game(divan::black_box(UNBRACED_GAME)).unwrap()
}
