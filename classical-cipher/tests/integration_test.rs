use classical_cipher::cipher::{
    AffineKey, CaesarKey, Cipher, CipherKey, Direction, HillKey, PlayfairGrid, PlayfairKey,
    TranspositionKey, VigenereKey, affine_key_valid, brute_force, hill_key_valid,
};
use classical_cipher::errors::CipherError;
use classical_cipher::ring::matrix_ops::{identity_matrix, matrix_mul};
use classical_cipher::ring::{Ring, determinant, inverse_mod, modular_inverse, normalize};

#[test]
fn caesar_scenarios() -> Result<(), CipherError> {
    let key = CaesarKey::new(3);
    assert_eq!(key.encode("hello world")?, "khoor zruog");
    assert_eq!(key.decode("khoor zruog")?, "hello world");

    let candidates = brute_force("khoor zruog")?;
    assert_eq!(candidates.len(), 26);
    assert_eq!(candidates[3], "hello world");
    Ok(())
}

#[test]
fn vigenere_scenario() -> Result<(), CipherError> {
    let key = VigenereKey::try_with("lemon")?;
    assert_eq!(key.encode("attackatdawn")?, "lxfopvefrnhr");
    Ok(())
}

#[test]
fn affine_scenario() -> Result<(), CipherError> {
    assert!(affine_key_valid(5));
    let key = AffineKey::try_with(5, 8)?;
    let cipher = key.encode("affine")?;
    assert_eq!(cipher, "ihhwvc");
    assert_eq!(key.decode(&cipher)?, "affine");
    Ok(())
}

#[test]
fn transposition_scenario() -> Result<(), CipherError> {
    let key = TranspositionKey::try_with(6)?;
    let cipher = key.encode("wearediscoveredsaveyourself")?;
    assert_ne!(cipher, "wearediscoveredsaveyourself");
    assert_eq!(key.decode(&cipher)?, "wearediscoveredsaveyourself");
    Ok(())
}

#[test]
fn playfair_grid_scenario() -> Result<(), CipherError> {
    let grid = PlayfairGrid::from_keyword("monarchy")?;
    assert_eq!(grid.at(0, 0), 'm');
    assert_eq!(grid.position('m'), Some((0, 0)));
    assert_eq!(grid.position('j'), grid.position('i'));

    let key = PlayfairKey::try_with("monarchy")?;
    assert_eq!(key.decode(&key.encode("wearediscovered")?)?, "wearediscoveredx");
    Ok(())
}

#[test]
fn hill_inverse_is_identity() -> Result<(), CipherError> {
    let ring = Ring::alphabet();
    let keys = vec![
        vec![vec![3, 3], vec![2, 5]],
        vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]],
        vec![
            vec![1, 2, 0, 1],
            vec![0, 1, 3, 0],
            vec![2, 0, 1, 1],
            vec![1, 1, 1, 0],
        ],
    ];

    for matrix in keys {
        assert!(hill_key_valid(&matrix), "{:?}", matrix);
        let inverse = inverse_mod(&matrix, &ring)?;
        assert_eq!(matrix_mul(&matrix, &inverse, &ring)?, identity_matrix(matrix.len()));

        let key = HillKey::try_with(matrix)?;
        let message = "attackatdawn";
        assert_eq!(message.len() % key.order(), 0);
        assert_eq!(key.decode(&key.encode(message)?)?, message);
    }
    Ok(())
}

#[test]
fn modular_arithmetic_contract() {
    assert_eq!(normalize(-27, 26), 25);
    assert_eq!(determinant(&vec![vec![3, 3], vec![2, 5]]), Ok(9));
    for a in -30..30 {
        match modular_inverse(a, 26) {
            Ok(x) => assert_eq!(normalize(a * x, 26), 1),
            Err(e) => {
                assert!(matches!(e, CipherError::NoInverse(_)));
                assert!(!affine_key_valid(a));
            }
        }
    }
}

#[test]
fn errors_are_local_to_one_call() -> Result<(), CipherError> {
    let key: CipherKey = CaesarKey::new(1).into();
    assert!(matches!(
        key.apply(Direction::Encode, "no digits 4 u"),
        Err(CipherError::MalformedInput(_))
    ));
    // The same key keeps working afterwards.
    assert_eq!(key.apply(Direction::Encode, "abc")?, "bcd");

    assert!(matches!(
        AffineKey::try_with(13, 0),
        Err(CipherError::InvalidKey(_))
    ));
    assert!(matches!(
        HillKey::try_with(vec![vec![1, 2], vec![2, 4]]),
        Err(CipherError::InvalidKey(_))
    ));
    assert!(matches!(
        VigenereKey::try_with(""),
        Err(CipherError::InvalidKey(_))
    ));
    Ok(())
}
