use electrostatics::prelude::*;

fn main() -> Result<(), ElectrostaticsError> {
    // Parallel-plate capacitor: 10 cm² plates, 1 mm gap, glass dielectric.
    let c = parallel_plate_capacitance_with(10.0, 1.0, Dielectric::Glass)?;
    println!("Capacitance: {:.3e} F", c.value());
    println!("Capacitance: {:.2} pF", c.as_picofarads());
    println!("Capacitance: {:.3} nF", c.as_nanofarads());

    // Reuse the computed capacitance downstream, the way a form would copy
    // the value into the other calculation blocks.
    let c_pf = c.as_picofarads();

    let bias = Voltage::new(1000.0);
    let density = charge_density(c_pf, bias.value(), 50.0)?;
    println!("Charge density at {bias:.0}: {density:.4}");

    let t = discharge_time_to_default_fraction(100.0, c_pf)?;
    println!("Time to lose 40% through 100 MΩ: {:.6} s", t.value());

    Ok(())
}
