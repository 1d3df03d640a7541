// src/extractors/fixtures.rs
//! A trimmed-down Generation I dex page with every table the extractors read.

pub const BULBASAUR_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Serebii.net Pokédex - #001 - Bulbasaur</title></head>
<body>
<div id="content">
<h1>Serebii.net Pokédex</h1>
<table class="dextable">
  <tr><td class="fooevo">Picture</td></tr>
  <tr><td class="fooinfo"><img src="/pokearth/sprites/rb/001.png"></td></tr>
</table>
<table class="dextable">
  <tr>
    <td class="fooevo">Name</td><td class="fooevo">Other Names</td>
    <td class="fooevo">No.</td><td class="fooevo">Type</td>
  </tr>
  <tr>
    <td class="fooinfo">Bulbasaur</td>
    <td class="fooinfo">Japan: Fushigidane フシギダネ<br>French: Bulbizarre<br>German: Bisasam<br>Korean: Isanghaessi 이상해씨</td>
    <td class="fooinfo">#001</td>
    <td class="cen">
      <a href="/pokedex-rby/grass.shtml"><img src="/pokedex-bw/type/grass.gif"></a>
      <a href="/pokedex-rby/poison.shtml"><img src="/pokedex-bw/type/poison.gif"></a>
    </td>
  </tr>
  <tr>
    <td class="fooevo">Classification</td><td class="fooevo">Height</td>
    <td class="fooevo">Weight</td><td class="fooevo">Capture Rate</td>
  </tr>
  <tr>
    <td class="fooinfo">Seed Pokémon</td>
    <td class="fooinfo">2'04"<br>0.7m</td>
    <td class="fooinfo">15.2lbs<br>6.9kg</td>
    <td class="fooinfo">45</td>
  </tr>
  <tr><td class="fooevo">Experience Growth</td><td class="fooevo">Effort Values Earned</td></tr>
  <tr>
    <td class="fooinfo">1,059,860 Points<br>Medium Slow</td>
    <td class="fooinfo">1 Special Point(s)</td>
  </tr>
</table>
<table class="dextable">
  <tr><td colspan="15" class="fooevo">Damage Taken</td></tr>
  <tr>
    <td class="footype"><a href="/attackdex-rby/normal.shtml"><img src="/games/type/normal.gif"></a></td>
    <td class="footype"><a href="/attackdex-rby/fire.shtml"><img src="/games/type/fire.gif"></a></td>
    <td class="footype"><a href="/attackdex-rby/water.shtml"><img src="/games/type/water.gif"></a></td>
    <td class="footype"><a href="/attackdex-rby/grass.shtml"><img src="/games/type/grass.gif"></a></td>
    <td class="footype"><a href="/attackdex-rby/electric.shtml"><img src="/games/type/electric.gif"></a></td>
  </tr>
  <tr>
    <td class="footype">*1</td><td class="footype">*2</td><td class="footype">*0.5</td>
    <td class="footype">*0.25</td><td class="footype">*0.5</td>
  </tr>
</table>
<table class="dextable">
  <tr><td colspan="6" class="fooevo">Evolutionary Chain</td></tr>
  <tr>
    <td class="pkmn"><a href="/pokedex/001.shtml"><img src="/pokedex/icon/001.png"></a></td>
    <td><img src="/pokedex-xy/evoicon/l16.png"></td>
    <td class="pkmn"><a href="/pokedex/002.shtml"><img src="/pokedex/icon/002.png"></a></td>
    <td><img src="/pokedex-xy/evoicon/l32.png"></td>
    <td>&nbsp;</td>
    <td class="pkmn"><a href="/pokedex/003.shtml"><img src="/pokedex/icon/003.png"></a></td>
  </tr>
</table>
<table class="dextable">
  <tr><td colspan="3" class="fooevo">Locations</td></tr>
  <tr><td class="fooevo">Game</td><td class="fooevo">Location</td></tr>
  <tr><td class="fooinfo">Green (Jp.)</td><td class="fooinfo">Blue (Intl.)</td><td class="fooinfo">Starter Pokémon</td></tr>
  <tr><td class="fooinfo">Yellow</td><td class="fooinfo">Cerulean City - Gift</td></tr>
</table>
<table class="dextable">
  <tr><td colspan="7" class="fooevo">Stats</td></tr>
  <tr><td class="fooevo">&nbsp;</td><td class="fooevo">HP</td><td class="fooevo">Attack</td><td class="fooevo">Defense</td><td class="fooevo">Special</td><td class="fooevo">Speed</td></tr>
  <tr><td class="fooinfo">Base Stats - Total: 253</td><td class="fooinfo">45</td><td class="fooinfo">49</td><td class="fooinfo">49</td><td class="fooinfo">65</td><td class="fooinfo">45</td></tr>
  <tr><td class="fooinfo" rowspan="2">Max Stats</td><td class="fooinfo">Lv. 50</td><td class="fooinfo">120</td><td class="fooinfo">69</td><td class="fooinfo">69</td><td class="fooinfo">85</td><td class="fooinfo">65</td></tr>
  <tr><td class="fooinfo">Lv. 100</td><td class="fooinfo">294</td><td class="fooinfo">218</td><td class="fooinfo">218</td><td class="fooinfo">251</td><td class="fooinfo">207</td></tr>
</table>
<table class="dextable">
  <tr><td colspan="7" class="fooevo">Red/Blue/Yellow Level Up</td></tr>
  <tr><th>Level</th><th>Attack Name</th><th>Type</th><th>Att.</th><th>Acc.</th><th>PP</th><th>Effect %</th></tr>
  <tr>
    <td class="fooinfo">—</td><td class="fooinfo"><a href="/attackdex-rby/tackle.shtml">Tackle</a></td>
    <td class="cen"><img src="/pokedex-bw/type/normal.gif"></td>
    <td class="fooinfo">35</td><td class="fooinfo">95</td><td class="fooinfo">35</td><td class="fooinfo">--</td>
  </tr>
  <tr><td class="fooinfo" colspan="7">A full-body charge attack.</td></tr>
  <tr>
    <td class="fooinfo">7</td><td class="fooinfo"><a href="/attackdex-rby/leechseed.shtml">Leech Seed</a></td>
    <td class="cen"><img src="/pokedex-bw/type/grass.gif"></td>
    <td class="fooinfo">--</td><td class="fooinfo">90</td><td class="fooinfo">10</td><td class="fooinfo">--</td>
  </tr>
  <tr><td class="fooinfo" colspan="7">Drains HP from the target each turn.</td></tr>
</table>
<table class="dextable">
  <tr><td colspan="7" class="fooevo">TM &amp; HM Attacks</td></tr>
  <tr><th>TM/HM #</th><th>Attack Name</th><th>Type</th><th>Att.</th><th>Acc.</th><th>PP</th><th>Effect %</th></tr>
  <tr>
    <td class="fooinfo">TM03</td><td class="fooinfo">Swords Dance</td>
    <td class="cen"><img src="/pokedex-bw/type/normal.gif"></td>
    <td class="fooinfo">--</td><td class="fooinfo">--</td><td class="fooinfo">30</td><td class="fooinfo">--</td>
  </tr>
  <tr>
    <td class="fooinfo">TM06</td><td class="fooinfo">Toxic</td>
    <td class="cen"><img src="/pokedex-bw/type/poison.gif"></td>
    <td class="fooinfo">--</td><td class="fooinfo">85</td><td class="fooinfo">10</td><td class="fooinfo">--</td>
  </tr>
  <tr><td class="fooinfo" colspan="7">Badly poisons the target.</td></tr>
</table>
</div>
</body>
</html>
"#;
