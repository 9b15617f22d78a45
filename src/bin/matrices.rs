use num_bigint::BigInt;
use num_traits::Zero;
use std::error::Error;
use std::io::{self, BufRead, Write};

use rust_matrices::{determinant, inverse, inverse_exact, Matrix, MatrixGen, MatrixResult};

type IntMatrix = MatrixGen<BigInt>;

// Usage:
//   matrices              run the demos
//   matrices '1 2; 3 4'   describe the given matrix
//   matrices -            read the matrix from stdin
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    match std::env::args().nth(1).as_deref() {
        None => {
            inverse_demo()?;
            println!();
            product_demo()?;
        }
        Some("-") => describe(&get_values()?)?,
        Some(text) => describe(&text.parse::<IntMatrix>()?)?,
    }
    Ok(())
}

fn get_values() -> Result<IntMatrix, Box<dyn Error>> {
    print!("Values? (Use '; ' to separate each row) ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.parse::<IntMatrix>()?)
}

fn inverse_demo() -> MatrixResult<()> {
    let a: IntMatrix = "1 4; 1 3".parse()?;
    let b: IntMatrix = "4 0; 1 2".parse()?;

    println!("A =\n{}", a);
    println!("B =\n{}", b);
    println!("det(A) = {}", determinant(&a)?);

    let a_inv = inverse(&a)?;
    println!("A^-1 =\n{}", a_inv);
    println!("B * A^-1 =\n{}", (&b * &a_inv)?);
    Ok(())
}

fn product_demo() -> MatrixResult<()> {
    let a: IntMatrix = "1 2 5 77; 3 4 7 11; 4 8 9 1".parse()?;
    let b: IntMatrix = "1 0; 0 1; 2 -1; 0 3".parse()?;

    println!("A * B =\n{}", (&a * &b)?);
    if let Err(error) = &b * &a {
        println!("B * A: {}", error);
    }
    println!("B^T * A^T =\n{}", (&b.transpose() * &a.transpose())?);
    Ok(())
}

fn describe(matrix: &IntMatrix) -> MatrixResult<()> {
    println!("{}x{} matrix\n{}", matrix.rows(), matrix.cols(), matrix);
    println!("transpose =\n{}", matrix.transpose());

    if !matrix.is_square() {
        return Ok(());
    }

    let det = determinant(matrix)?;
    println!("determinant = {}", det);
    if det.is_zero() {
        println!("singular, no inverse");
        return Ok(());
    }

    println!("inverse (truncated) =\n{}", inverse(matrix)?);
    println!("inverse (exact) =\n{}", inverse_exact(matrix)?);
    Ok(())
}
