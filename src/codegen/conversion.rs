// src/codegen/conversion.rs

use crate::cases::TestCaseSet;

use super::{CATALOG, TEST_CONVERSION};

/// Render the conversion-test class: a `ConversionTester` built once in
/// `@BeforeClass`, one `@Test` per date-hour case.
pub fn render(package: &str, cases: &TestCaseSet) -> String {
    let class = cases.class_prefix();
    let method = cases.method_prefix();

    let mut out = String::new();
    out.push_str(&format!("package {};\n", package));
    out.push('\n');
    out.push_str("import org.junit.BeforeClass;\n");
    out.push_str("import org.junit.Test;\n");
    out.push('\n');
    out.push_str("import com.powsybl.cgmes.CgmesModelException;\n");
    out.push_str("import com.powsybl.cgmes.conversion.test.ConversionTester;\n");
    out.push_str("import com.powsybl.cgmes.conversion.test.network.compare.ComparisonConfig;\n");
    out.push_str("import com.powsybl.triplestore.TripleStoreFactory;\n");
    out.push('\n');
    out.push_str(&format!("public class {}{} {{\n", class, TEST_CONVERSION));
    out.push_str("    @BeforeClass\n");
    out.push_str("    public static void setUp() {\n");
    out.push_str(&format!("        actuals = new {}{}();\n", class, CATALOG));
    out.push_str("        tester = new ConversionTester(\n");
    out.push_str("                TripleStoreFactory.onlyDefaultImplementation(),\n");
    out.push_str("                new ComparisonConfig()\n");
    out.push_str("                        .checkNetworkId(false)\n");
    out.push_str("                        .checkVoltageLevelLimits(false)\n");
    out.push_str("                        .checkGeneratorReactiveCapabilityCurve(false)\n");
    out.push_str("                        .checkGeneratorRegulatingTerminal(false));\n");
    out.push_str("    }\n");
    for dh in &cases.date_hours {
        out.push_str("    @Test\n");
        out.push_str(&format!("    public void {}{}()  {{\n", method, dh));
        out.push_str(&format!(
            "        tester.testConversion(null, actuals.{}{}());\n",
            method, dh
        ));
        out.push_str("    }\n");
    }
    out.push_str(&format!(
        "    private static {}{}  actuals;\n",
        class, CATALOG
    ));
    out.push_str("    private static ConversionTester tester;\n");
    out.push_str("}\n");
    out
}
